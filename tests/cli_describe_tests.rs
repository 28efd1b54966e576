//! End-to-end tests for `ebu-prompt-helper describe`.

use ebu_prompt_helper::prompt::describer::{describe_male, MaleFeatures};

mod fixtures;
use fixtures::*;

#[test]
fn test_describe_female_default_lines() {
    let json = json_ok(&run(&["describe", "female", "--seed", "3", "--json"]));
    let face = json["face_description"].as_str().unwrap();
    let labels: Vec<&str> = face
        .lines()
        .map(|line| line.split(':').next().unwrap())
        .collect();
    assert_eq!(labels.first(), Some(&"Eyes"));
    assert!(labels.contains(&"Chin/Jaw"));
    assert!(!labels.contains(&"Makeup"));
    assert!(!json["hair_color"].as_str().unwrap().is_empty());
}

#[test]
fn test_describe_female_toggles() {
    let json = json_ok(&run(&[
        "describe", "female", "--seed", "3", "--with", "makeup", "--without", "ears", "--json",
    ]));
    let face = json["face_description"].as_str().unwrap();
    assert!(face.contains("Makeup: "));
    assert!(!face.contains("Ears: "));
}

#[test]
fn test_describe_male_matches_library() {
    let json = json_ok(&run(&["describe", "male", "--seed", "0", "--json"]));
    let expected = describe_male(0, &MaleFeatures::default()).unwrap();
    assert_eq!(json, serde_json::to_value(&expected).unwrap());
}

#[test]
fn test_describe_unknown_feature() {
    let output = run(&["describe", "male", "--with", "lips"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown feature"));
}
