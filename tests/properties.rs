//! Behavioral properties of the line diff engine, checked over a fixed corpus
//! of text pairs.

use tola_linediff::prelude::*;

const CORPUS: &[&str] = &[
    "",
    "\n",
    "\n\n",
    "a",
    "a\n",
    "a\nb\nc",
    "a\nx\nc",
    "c\nb\na",
    "a\na\na\nb",
    "b\na\na",
    "fn main() {\n    println!(\"hi\");\n}\n",
    "fn main() {\n    println!(\"hello\");\n    return;\n}\n",
    "  indented\n\ttabbed\r\ncrlf",
    "x\ny\nz\nx\ny\nz",
];

fn kinds(result: &DiffResult) -> Vec<(OpKind, &str)> {
    result.ops.iter().map(|op| (op.kind(), op.content())).collect()
}

fn lines(text: &str) -> Vec<&str> {
    tokenize(text).iter().collect()
}

#[test]
fn identity_yields_only_equal_ops() {
    for text in CORPUS {
        let result = diff(text, text).unwrap();
        assert!(result.ops.iter().all(DiffOp::is_equal), "{text:?}");
        assert_eq!(result.stats.added, 0);
        assert_eq!(result.stats.removed, 0);
        assert_eq!(result.stats.unchanged, tokenize(text).len());
    }
}

#[test]
fn equal_and_delete_rebuild_old_lines() {
    for old in CORPUS {
        for new in CORPUS {
            let result = diff(old, new).unwrap();
            let rebuilt: Vec<&str> = result
                .ops
                .iter()
                .filter(|op| op.kind() != OpKind::Insert)
                .map(DiffOp::content)
                .collect();
            assert_eq!(rebuilt, lines(old), "{old:?} -> {new:?}");
            assert_eq!(result.old_text(), *old);
        }
    }
}

#[test]
fn equal_and_insert_rebuild_new_lines() {
    for old in CORPUS {
        for new in CORPUS {
            let result = diff(old, new).unwrap();
            let rebuilt: Vec<&str> = result
                .ops
                .iter()
                .filter(|op| op.kind() != OpKind::Delete)
                .map(DiffOp::content)
                .collect();
            assert_eq!(rebuilt, lines(new), "{old:?} -> {new:?}");
            assert_eq!(result.new_text(), *new);
        }
    }
}

#[test]
fn gutter_numbers_are_consecutive_per_side() {
    for old in CORPUS {
        for new in CORPUS {
            let result = diff(old, new).unwrap();
            let old_nums: Vec<usize> = result.old_pane().map(|l| l.line_no).collect();
            let new_nums: Vec<usize> = result.new_pane().map(|l| l.line_no).collect();
            assert_eq!(old_nums, (1..=tokenize(old).len()).collect::<Vec<_>>());
            assert_eq!(new_nums, (1..=tokenize(new).len()).collect::<Vec<_>>());
        }
    }
}

#[test]
fn reversed_direction_swaps_counts() {
    for a in CORPUS {
        for b in CORPUS {
            let forward = diff(a, b).unwrap();
            let backward = diff(b, a).unwrap();
            assert_eq!(backward.stats, forward.stats.inverted(), "{a:?} <-> {b:?}");
        }
    }
}

#[test]
fn reversed_pure_insertion_is_tag_swap() {
    let forward = diff("a\nc", "a\nb\nc").unwrap();
    let backward = diff("a\nb\nc", "a\nc").unwrap();
    assert_eq!(backward, forward.inverted());
}

#[test]
fn substitution_scenario() {
    let result = diff("a\nb\nc", "a\nx\nc").unwrap();
    assert_eq!(
        kinds(&result),
        vec![
            (OpKind::Equal, "a"),
            (OpKind::Delete, "b"),
            (OpKind::Insert, "x"),
            (OpKind::Equal, "c"),
        ]
    );
}

#[test]
fn empty_texts_scenario() {
    let result = diff("", "").unwrap();
    assert_eq!(kinds(&result), vec![(OpKind::Equal, "")]);
    assert_eq!(
        result.stats,
        Stats {
            added: 0,
            removed: 0,
            unchanged: 1
        }
    );
}

#[test]
fn disjoint_scenario() {
    let result = diff("p\nq\nr", "s\nt").unwrap();
    assert_eq!(
        kinds(&result),
        vec![
            (OpKind::Delete, "p"),
            (OpKind::Delete, "q"),
            (OpKind::Delete, "r"),
            (OpKind::Insert, "s"),
            (OpKind::Insert, "t"),
        ]
    );
}

#[test]
fn trailing_newline_scenario() {
    let result = diff("a\n", "a").unwrap();
    assert_eq!(kinds(&result), vec![(OpKind::Equal, "a"), (OpKind::Delete, "")]);
    assert_eq!(result.ops[1].old_line(), Some(2));
}

#[test]
fn tie_break_on_swapped_lines() {
    // Keeping "y" and keeping "x" are equally long; the backtrack keeps the
    // later new line aligned.
    let result = diff("x\ny", "y\nx").unwrap();
    assert_eq!(
        kinds(&result),
        vec![(OpKind::Delete, "x"), (OpKind::Equal, "y"), (OpKind::Insert, "x")]
    );
}

#[test]
fn repeated_lines_tie_break() {
    let result = diff("a\nb\na", "b\na\nb").unwrap();
    assert_eq!(
        kinds(&result),
        vec![
            (OpKind::Delete, "a"),
            (OpKind::Equal, "b"),
            (OpKind::Equal, "a"),
            (OpKind::Insert, "b"),
        ]
    );
}

#[test]
fn oversized_input_is_refused() {
    let big = "line\n".repeat(50);
    let err = diff_with_config(&big, "line", &DiffConfig::default().with_max_lines(10)).unwrap_err();
    assert!(err.is_resource_exceeded());
    assert!(err.to_string().starts_with("input too large to diff"));
}

#[test]
fn memoized_diff_matches_direct() {
    let mut cache = DiffCache::default();
    let memo = cache.get_or_diff("a\nb", "b\nc").unwrap();
    assert_eq!(*memo, diff("a\nb", "b\nc").unwrap());
}

#[test]
fn export_from_result_alone() {
    let result = diff("keep\nold", "keep\nnew").unwrap();
    let config = ExportConfig::default().with_header("a.txt", "b.txt");
    assert_eq!(
        to_text(&result, &config),
        "--- a.txt\n+++ b.txt\n  keep\n- old\n+ new"
    );
}
