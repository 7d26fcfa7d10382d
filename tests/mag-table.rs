/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! End-to-end runs of the task layer on small input documents.

#[macro_use] extern crate pretty_assertions;
#[macro_use] extern crate serde_json;

use magframe_tasks::{run_from_str, Format};

fn run_json(yaml: &str) -> serde_json::Value {
    let text = run_from_str(yaml, Format::Json).unwrap();
    serde_json::from_str(&text).unwrap()
}

const TWO_SUBLATTICES: &str = "
mode: exact
extension: [2, 1, 1]
atoms:
  - { frac: [0.0, 0.0, 0.0], index: 1, label: Cu1 }
  - { frac: [0.5, 0.5, 0.0], index: 2, label: Cu2 }
moments:
  - [0, 0, 3]
  - ['sqrt(3)/2', '1/2', 0]
  - [5, 0, 0]
  - ['-sqrt(3)/2', '-1/2', 0]
";

#[test]
fn exact_json() {
    let json = run_json(TWO_SUBLATTICES);

    assert_eq!(json["mode"], json!("exact"));
    assert_eq!(json["atom"], json!([1, 2, 1, 2]));
    assert_eq!(json["labels"], json!(["Cu1", "Cu2", "Cu1", "Cu2"]));
    assert_eq!(json["positions"], json!([
        [0.0, 0.0, 0.0],
        [0.5, 0.5, 0.0],
        [1.0, 0.0, 0.0],
        [1.5, 0.5, 0.0],
    ]));
    assert_eq!(json["magnitudes"], json!(["3", "1", "5", "1"]));
    assert_eq!(json["e3"], json!([
        ["0", "0", "1"],
        ["sqrt(3)/2", "1/2", "0"],
        ["1", "0", "0"],
        ["-sqrt(3)/2", "-1/2", "0"],
    ]));
    assert_eq!(json["e2"], json!([
        ["0", "1", "0"],
        ["0", "0", "-1"],
        ["0", "0", "1"],
        ["0", "0", "1"],
    ]));
    assert_eq!(json["e1"], json!([
        ["1", "0", "0"],
        ["1/2", "-sqrt(3)/2", "0"],
        ["0", "1", "0"],
        ["1/2", "-sqrt(3)/2", "0"],
    ]));
}

#[test]
fn numeric_matches_exact() {
    let exact = run_json(TWO_SUBLATTICES);
    let numeric = run_json(&TWO_SUBLATTICES.replace("mode: exact", "mode: numeric"));

    assert_eq!(numeric["mode"], json!("numeric"));
    assert_eq!(numeric["atom"], exact["atom"]);
    assert_eq!(numeric["positions"], exact["positions"]);

    for key in &["e1", "e2", "e3"] {
        let exact = exact[key].as_array().unwrap();
        let numeric = numeric[key].as_array().unwrap();
        for (a, b) in exact.iter().zip(numeric) {
            for k in 0..3 {
                let a: magframe_exact::Surd = a[k].as_str().unwrap().parse().unwrap();
                let b = b[k].as_f64().unwrap();
                assert!((a.to_f64() - b).abs() < 1e-12, "{} {} vs {}", key, a, b);
            }
        }
    }
}

#[test]
fn no_moments() {
    let json = run_json("
mode: numeric
extension: [3, 3, 1]
atoms:
  - { frac: [0.0, 0.0, 0.0], index: 1 }
moments: []
");
    assert_eq!(json["atom"], serde_json::Value::Null);
    assert_eq!(json["positions"], json!([]));
    assert_eq!(json["e1"], json!([]));

    let text = run_from_str("atoms: []", Format::Table).unwrap();
    assert_eq!(text, "# mode: numeric\n# no magnetic atoms\n");
}

#[test]
fn text_table() {
    let text = run_from_str(TWO_SUBLATTICES, Format::Table).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "# mode: exact");
    assert_eq!(
        lines[1].split_whitespace().collect::<Vec<_>>(),
        vec!["#", "col", "atom", "label", "position", "|m|", "moment", "e1", "e2", "e3"],
    );
    assert!(lines[4].contains("[5, 0, 0]"));
    assert!(lines[5].trim_start().starts_with("3    2     Cu2    [1.5, 0.5, 0]"));
}

#[test]
fn shape_mismatch() {
    let err = run_from_str("
extension: [2, 2, 2]
atoms:
  - { frac: [0.0, 0.0, 0.0], index: 1 }
moments:
  - [0, 0, 1]
", Format::Json).unwrap_err();
    assert_eq!(err.to_string(), "got 1 moments, but the supercell contains 8 magnetic atoms");
}

#[test]
fn bad_moment_expression() {
    assert!(run_from_str("moments: [[0, 0, 'sqrt(2']]", Format::Json).is_err());
    // rejected outright rather than expanded into a gigantic integer
    assert!(run_from_str("moments: [[0, 0, '1e99999999999999']]", Format::Json).is_err());
}

#[test]
fn huge_numeric_moments() {
    let json = run_json("
mode: numeric
atoms:
  - { frac: [0.0, 0.0, 0.0], index: 1 }
moments:
  - [1e200, 1e200, 0]
");
    let e3 = json["e3"][0].as_array().unwrap();
    let half = 0.5f64.sqrt();
    assert!((e3[0].as_f64().unwrap() - half).abs() < 1e-12);
    assert!((e3[1].as_f64().unwrap() - half).abs() < 1e-12);
    assert_eq!(json["e2"][0], json!([0.0, 0.0, -1.0]));
}
