use rand::SeedableRng;
use rand::rngs::StdRng;
use wordscatter_core::words::{random_word, scramble_word, words_of_length};

#[test]
fn scramble_is_a_different_permutation() {
    let mut rng = StdRng::seed_from_u64(12);
    for word in ["cat", "bird", "apple", "ab"] {
        for _ in 0..20 {
            let s = scramble_word(word, &mut rng).expect("scramble");
            assert_ne!(s, word);
            let mut a: Vec<char> = s.chars().collect();
            let mut b: Vec<char> = word.chars().collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }
}

#[test]
fn scramble_without_distinct_permutation() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(scramble_word("", &mut rng), None);
    assert_eq!(scramble_word("a", &mut rng), None);
    assert_eq!(scramble_word("zzzz", &mut rng), None);
}

#[test]
fn word_lists_by_length() {
    for len in 3..=5 {
        let list = words_of_length(len);
        assert!(!list.is_empty());
        assert!(list.iter().all(|w| w.len() == len));
        assert!(list.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }
    assert!(words_of_length(9).is_empty());
}

#[test]
fn random_word_picks_from_list() {
    let mut rng = StdRng::seed_from_u64(5);
    let w = random_word(4, &mut rng).expect("word");
    assert!(words_of_length(4).contains(&w));
    assert_eq!(random_word(2, &mut rng), None);
}
