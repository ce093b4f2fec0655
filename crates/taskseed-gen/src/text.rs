//! Identifier, title, and description synthesis.

use rand::Rng;
use rand::seq::SliceRandom;
use taskseed_core::catalog::{DESCRIPTION_SENTENCES, ID_ALPHABET, ID_LENGTH, TITLE_WORDS};

use crate::GenerateError;

/// An 8-character id drawn uniformly from `[a-z0-9]`. No collision check.
pub fn task_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect()
}

/// One to four title words, drawn with replacement.
pub fn title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(1..=4);
    (0..len)
        .map(|_| TITLE_WORDS[rng.gen_range(0..TITLE_WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two to five distinct description sentences.
pub fn description<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerateError> {
    let count = rng.gen_range(2..=5);
    sample_sentences(&DESCRIPTION_SENTENCES, count, rng)
}

/// Draw `count` distinct sentences in random order and join them.
fn sample_sentences<R: Rng + ?Sized>(
    vocabulary: &[&str],
    count: usize,
    rng: &mut R,
) -> Result<String, GenerateError> {
    if count > vocabulary.len() {
        return Err(GenerateError::VocabularyTooSmall {
            requested: count,
            available: vocabulary.len(),
        });
    }
    Ok(vocabulary
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join(" "))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use taskseed_core::catalog::is_task_id;

    use super::*;
    use crate::rng::seeded;

    #[test]
    fn ids_have_expected_shape() {
        let mut rng = seeded(11);
        for _ in 0..200 {
            let id = task_id(&mut rng);
            assert!(is_task_id(&id), "bad id {id}");
        }
    }

    #[test]
    fn titles_use_one_to_four_vocabulary_words() {
        let mut rng = seeded(12);
        for _ in 0..200 {
            let title = title(&mut rng);
            let words: Vec<&str> = title.split(' ').collect();
            assert!((1..=4).contains(&words.len()), "bad title {title}");
            assert!(words.iter().all(|word| TITLE_WORDS.contains(word)));
        }
    }

    #[test]
    fn descriptions_use_distinct_sentences() {
        let mut rng = seeded(13);
        for _ in 0..200 {
            let description = description(&mut rng).unwrap();
            let used: Vec<&str> = DESCRIPTION_SENTENCES
                .iter()
                .copied()
                .filter(|sentence| description.contains(sentence))
                .collect();
            assert!((2..=5).contains(&used.len()), "bad description {description}");
            let distinct: HashSet<&str> = used.iter().copied().collect();
            assert_eq!(distinct.len(), used.len());
            let rebuilt_len = used.iter().map(|s| s.len()).sum::<usize>() + used.len() - 1;
            assert_eq!(description.len(), rebuilt_len);
        }
    }

    #[test]
    fn oversized_sample_is_rejected() {
        let mut rng = seeded(14);
        let error = sample_sentences(&["One.", "Two."], 3, &mut rng).unwrap_err();
        assert!(matches!(
            error,
            GenerateError::VocabularyTooSmall {
                requested: 3,
                available: 2
            }
        ));
    }
}
