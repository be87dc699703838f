use super::*;
use crate::config::MineConfig;
use crate::corpus::Corpus;
use crate::observer::NoopObserver;
use crate::output::ResultWriter;
use crate::storage::FrequentLevel;

fn patterns(level: &FrequentLevel) -> Vec<(String, usize)> {
    level
        .iter_patterns()
        .map(|(key, count)| (key.to_string(), count))
        .collect()
}

#[test]
fn test_level_one_projection() {
    let corpus = Corpus::from_lines(["x y", "x y z"]);
    let candidates = project_level_one(&corpus);

    assert_eq!(candidates["x"].count, 2);
    assert_eq!(candidates["y"].count, 2);
    assert_eq!(candidates["z"].count, 1);

    let next: Vec<_> = candidates["x"]
        .projection
        .iter()
        .map(|word| (word.tx, corpus.resolve(word).unwrap()))
        .collect();
    assert_eq!(next, vec![(1, "y"), (2, "y")]);
    assert!(candidates["z"].projection.is_empty());
}

#[test]
fn test_repeated_word_counts_once() {
    let corpus = Corpus::from_lines(["a b a b"]);
    let candidates = project_level_one(&corpus);

    assert_eq!(candidates["a"].count, 1);
    assert_eq!(candidates["a"].projection.len(), 2);

    let extended = extend_candidates(&candidates, &corpus);
    assert_eq!(extended["a;b"].count, 1);
    assert_eq!(extended["b;a"].count, 1);
    // the second "a b" ends the transaction, so only one projection survives
    assert_eq!(extended["a;b"].projection.len(), 1);
}

#[test]
fn test_extension_skips_separator_runs() {
    let corpus = Corpus::from_lines(["red   green  blue"]);
    let level_one = project_level_one(&corpus);
    let level_two = extend_candidates(&level_one, &corpus);

    assert_eq!(level_two.keys().collect::<Vec<_>>(), vec!["green;blue", "red;green"]);
    let after = level_two["red;green"].projection[0];
    assert_eq!(corpus.resolve(&after), Some("blue"));
}

#[test]
fn test_prefix_span_at_boundary() {
    let corpus = Corpus::from_lines(["x y", "x y z"]);
    let levels = prefix_span(&corpus, 0.5).unwrap();

    assert_eq!(levels.len(), 3);
    assert_eq!(patterns(&levels[0]), vec![
        ("x".to_string(), 2),
        ("y".to_string(), 2),
        ("z".to_string(), 1),
    ]);
    assert_eq!(patterns(&levels[1]), vec![
        ("x;y".to_string(), 2),
        ("y;z".to_string(), 1),
    ]);
    assert_eq!(patterns(&levels[2]), vec![("x;y;z".to_string(), 1)]);
}

#[test]
fn test_prefix_span_above_boundary() {
    let corpus = Corpus::from_lines(["x y", "x y z"]);
    let levels = prefix_span(&corpus, 0.6).unwrap();

    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].count_of("z"), None);
    assert_eq!(patterns(&levels[1]), vec![("x;y".to_string(), 2)]);
}

#[test]
fn test_levels_bounded_by_longest_run() {
    let corpus = Corpus::from_lines(["a b a b", "c"]);
    let levels = prefix_span(&corpus, 0.5).unwrap();

    assert_eq!(levels.len(), 4);
    assert_eq!(levels[3].count_of("a;b;a;b"), Some(1));
    for level in &levels {
        assert!(level.iter_patterns().all(|(_, count)| count == 1));
    }
}

#[test]
fn test_extended_support_never_exceeds_prefix() {
    let corpus = Corpus::from_lines([
        "the cat sat on the mat",
        "the cat ran",
        "a cat sat on the sofa",
        "the dog sat on the mat",
    ]);
    let levels = prefix_span(&corpus, 0.25).unwrap();

    for pair in levels.windows(2) {
        for (key, count) in pair[1].iter_patterns() {
            let (prefix, _) = key.rsplit_once(';').unwrap();
            let parent = pair[0].count_of(prefix).unwrap();
            assert!(count <= parent, "{} ({}) > {} ({})", key, count, prefix, parent);
        }
    }
    assert_eq!(levels[1].count_of("sat;on"), Some(3));
    assert_eq!(levels[2].count_of("sat;on;the"), Some(3));
}

#[test]
fn test_mine_sequences_output() {
    let corpus = Corpus::from_lines(["x y", "x y z"]);
    let config = MineConfig::default().with_min_support(0.6);
    let mut writer = ResultWriter::new(Vec::new(), "memory");

    let summary = mine_sequences(&corpus, &config, &mut writer, &mut NoopObserver).unwrap();
    assert_eq!(summary.levels, 2);
    assert_eq!(summary.patterns, 3);

    let text = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(text, "2:x\n2:y\n2:x;y\n");
}

#[test]
fn test_empty_corpus_yields_nothing() {
    let corpus = Corpus::from_lines(Vec::<String>::new());
    assert!(prefix_span(&corpus, 0.01).unwrap().is_empty());
}
