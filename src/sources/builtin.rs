//! Built-in offline lexicon
//!
//! The starter dictionary that ships with the app: a handful of showcase
//! words, the word of the day, and the curated collections. Definitions
//! and glosses are in Turkish, matching the app's audience.

use serde::{Deserialize, Serialize};

use crate::vocabulary::VocabularyEntry;

use super::{DefinitionSource, LookupError};

/// A themed set of words
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub words: Vec<VocabularyEntry>,
}

/// Offline dictionary content bundled with the app
pub struct BuiltinLexicon {
    entries: Vec<VocabularyEntry>,
    word_of_the_day: VocabularyEntry,
    collections: Vec<Collection>,
}

impl BuiltinLexicon {
    pub fn new() -> Self {
        Self {
            entries: starter_words(),
            word_of_the_day: word_of_the_day(),
            collections: curated_collections(),
        }
    }

    pub fn word_of_the_day(&self) -> &VocabularyEntry {
        &self.word_of_the_day
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }
}

impl Default for BuiltinLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionSource for BuiltinLexicon {
    /// Look a word up across the starter words, the word of the day, and
    /// every curated collection
    fn lookup(&self, word: &str) -> Result<VocabularyEntry, LookupError> {
        self.entries
            .iter()
            .chain(std::iter::once(&self.word_of_the_day))
            .chain(self.collections.iter().flat_map(|c| c.words.iter()))
            .find(|e| e.is_word(word))
            .cloned()
            .ok_or_else(|| LookupError::NotFound(word.to_string()))
    }
}

fn word(
    word: &str,
    phonetic: &str,
    part_of_speech: &str,
    definition: &str,
    example: &str,
) -> VocabularyEntry {
    VocabularyEntry {
        phonetic: Some(phonetic.to_string()),
        examples: vec![example.to_string()],
        ..VocabularyEntry::new(
            word.to_string(),
            part_of_speech.to_string(),
            vec![definition.to_string()],
        )
    }
}

fn starter_words() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry {
            etymology: Some("Yunanca petra 'taş' + ichōr 'ilahi sıvı' kelimelerinden.".to_string()),
            ..word(
                "Petrichor",
                "/ˈpeˌtrīkôr/",
                "İsim",
                "Uzun süreli sıcak ve kuru havanın ardından gelen ilk yağmura sıklıkla eşlik eden hoş koku.",
                "Yaz fırtınasından sonra hava petrichor kokusuyla doluydu.",
            )
        },
        VocabularyEntry {
            etymology: Some("Latince ineffabilis kelimesinden.".to_string()),
            ..word(
                "Ineffable",
                "/inˈefəb(ə)l/",
                "Sıfat",
                "Kelimelerle ifade edilemeyecek veya tarif edilemeyecek kadar büyük veya aşırı.",
                "Gün doğumunun tarif edilemez güzelliği onları suskun bıraktı.",
            )
        },
    ]
}

fn word_of_the_day() -> VocabularyEntry {
    VocabularyEntry {
        etymology: Some(
            "Geç Latince mellifluus, Latince mel 'bal' + fluere 'akmak' köklerinden.".to_string(),
        ),
        etymology_stages: vec![
            "Latince: mel (bal)".to_string(),
            "Latince: fluere (akmak)".to_string(),
            "Geç Latince: mellifluus".to_string(),
            "İngilizce: mellifluous".to_string(),
        ],
        synonyms: vec![
            "Ahenkli".to_string(),
            "Ezgi dolu".to_string(),
            "Tatlı sesli".to_string(),
            "Uyumlu".to_string(),
        ],
        register: Some("Edebi".to_string()),
        connotation: Some("Olumlu".to_string()),
        ..word(
            "Mellifluous",
            "/məˈlɪfluəs/",
            "Sıfat",
            "(Bir ses veya kelime için) tatlı veya müzikal; duyması hoş.",
            "Anlatıcının o tatlı sesi sesli kitabı dinlemeyi bir zevk haline getirdi.",
        )
    }
}

fn curated_collections() -> Vec<Collection> {
    vec![
        Collection {
            id: "lit-1".to_string(),
            title: "Edebi Mücevherler".to_string(),
            description: "Bir resim çizen kelimeler, seçici okuyucu ve yazar için özenle hazırlanmış."
                .to_string(),
            words: vec![
                VocabularyEntry {
                    etymology: Some("Latince pulchritudo 'güzellik' kelimesinden.".to_string()),
                    synonyms: vec![
                        "Güzel".to_string(),
                        "Muhteşem".to_string(),
                        "Enfes".to_string(),
                    ],
                    register: Some("Resmi, Edebi".to_string()),
                    connotation: Some("Olumlu".to_string()),
                    ..word(
                        "Pulchritudinous",
                        "/ˌpʌlkrɪˈtjuːdɪnəs/",
                        "Sıfat",
                        "Büyük fiziksel güzelliğe sahip.",
                        "O güzel manzara nefes kesiciydi.",
                    )
                },
                VocabularyEntry {
                    etymology: Some("Yunanca aithēr 'üst hava' kelimesinden.".to_string()),
                    synonyms: vec![
                        "Narin".to_string(),
                        "Semavi".to_string(),
                        "Başka dünyaya ait".to_string(),
                    ],
                    register: Some("Edebi".to_string()),
                    connotation: Some("Olumlu".to_string()),
                    ..word(
                        "Ethereal",
                        "/ɪˈθɪəriəl/",
                        "Sıfat",
                        "Son derece narin ve hafif, sanki bu dünyaya ait değilmiş gibi mükemmel.",
                        "Onun o ilahi güzelliği odadaki herkesi büyüledi.",
                    )
                },
            ],
        },
        Collection {
            id: "arch-1".to_string(),
            title: "Mimari Harikalar".to_string(),
            description: "Yapı, form ve mekan dili, antik sütunlardan modern cephelere.".to_string(),
            words: vec![
                VocabularyEntry {
                    etymology: Some("Latince fenestra 'pencere' kelimesinden.".to_string()),
                    synonyms: vec!["Pencere düzeni".to_string(), "Camlama".to_string()],
                    register: Some("Teknik".to_string()),
                    connotation: Some("Nötr".to_string()),
                    ..word(
                        "Fenestration",
                        "/ˌfɛnɪˈstreɪʃn/",
                        "İsim",
                        "Bir binanın cephelerindeki pencere ve kapıların düzenlenmesi.",
                        "Binanın pencere düzeni doğal ışığı en üst düzeye çıkarmak için tasarlandı.",
                    )
                },
                VocabularyEntry {
                    etymology: Some(
                        "Kökeni belirsiz, belki 'cant' (kenar) + 'lever' (kaldıraç).".to_string(),
                    ),
                    synonyms: vec![
                        "Çıkıntı".to_string(),
                        "Konsol".to_string(),
                        "Braket".to_string(),
                    ],
                    register: Some("Teknik".to_string()),
                    connotation: Some("Nötr".to_string()),
                    ..word(
                        "Cantilever",
                        "/ˈkæntɪˌliːvər/",
                        "İsim",
                        "Yalnızca bir ucundan sabitlenmiş, genellikle köprü inşaatında kullanılan uzun çıkıntılı kiriş.",
                        "Balkon, bahçenin üzerine doğru uzanan bir konsoldu.",
                    )
                },
            ],
        },
        Collection {
            id: "sci-1".to_string(),
            title: "Bilimsel Kavramlar".to_string(),
            description: "Evreni tanımlayan kelime dağarcığını keşfedin, kuantumdan kozmiğe."
                .to_string(),
            words: vec![
                VocabularyEntry {
                    etymology: Some("Yunanca heuriskein 'bulmak' kelimesinden.".to_string()),
                    synonyms: vec![
                        "Meraklı".to_string(),
                        "Araştırmacı".to_string(),
                        "Deneysel".to_string(),
                    ],
                    register: Some("Akademik".to_string()),
                    connotation: Some("Nötr".to_string()),
                    ..word(
                        "Heuristic",
                        "/hjʊˈrɪstɪk/",
                        "Sıfat",
                        "Bir kişinin bir şeyi kendisi keşfetmesini veya öğrenmesini sağlayan.",
                        "Öğretmen problem çözmede buluşsal bir yaklaşım kullandı.",
                    )
                },
                VocabularyEntry {
                    etymology: Some("Yunanca kataluein 'çözmek' kelimesinden.".to_string()),
                    synonyms: vec![
                        "Hızlandırıcı".to_string(),
                        "İtici güç".to_string(),
                        "Uyarıcı".to_string(),
                    ],
                    register: Some("Bilimsel".to_string()),
                    connotation: Some("Nötr".to_string()),
                    ..word(
                        "Catalyst",
                        "/ˈkætəlɪst/",
                        "İsim",
                        "Kendisinin kalıcı bir kimyasal değişime uğramadan bir kimyasal reaksiyonun hızını artıran madde.",
                        "Enzim reaksiyonda bir katalizör görevi gördü.",
                    )
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = BuiltinLexicon::new();

        assert!(lexicon.lookup("petrichor").is_ok());
        assert!(lexicon.lookup("MELLIFLUOUS").is_ok());
        assert!(matches!(
            lexicon.lookup("sesquipedalian"),
            Err(LookupError::NotFound(_))
        ));
    }

    #[test]
    fn test_lookup_reaches_collection_words() {
        let lexicon = BuiltinLexicon::new();

        let entry = lexicon.lookup("cantilever").unwrap();
        assert_eq!(entry.word, "Cantilever");
        assert_eq!(entry.srs_level, 0);
        assert!(entry.next_review_at.is_none());
    }

    #[test]
    fn test_collection_ids() {
        let lexicon = BuiltinLexicon::new();

        assert_eq!(lexicon.collections().len(), 3);
        assert!(lexicon.collection("lit-1").is_some());
        assert!(lexicon.collection("unknown").is_none());
    }
}
