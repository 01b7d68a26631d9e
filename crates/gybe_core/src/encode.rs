//! YAML emission for serialized value trees.
//!
//! serde_yaml follows the YAML 1.2 core schema, so strings such as `on` or
//! `yes` are written as plain scalars. YAML 1.1 readers load those as
//! booleans. Strings matching a YAML 1.1 boolean word are single-quoted here.

use gybe_model::{Mapping, Value};

use crate::error::TranspileResult;

/// Plain scalars that YAML 1.1 resolves to booleans but YAML 1.2 does not.
const YAML11_BOOL_WORDS: &[&str] = &[
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "on", "On", "ON", "off", "Off",
    "OFF",
];

const MARKER_STEM: &str = "__gybe_yaml11_";

/// Encode a value tree as one YAML document.
pub fn to_yaml(value: &Value) -> TranspileResult<String> {
    let mut has_bool_word = false;
    visit_strings(value, &mut |s| has_bool_word |= is_bool_word(s));
    if !has_bool_word {
        return Ok(serde_yaml::to_string(value)?);
    }

    let marker = unused_marker(value);
    let mut yaml = serde_yaml::to_string(&mask(value, &marker))?;
    for word in YAML11_BOOL_WORDS {
        yaml = yaml.replace(&placeholder(&marker, word), &format!("'{}'", word));
    }
    Ok(yaml)
}

fn is_bool_word(s: &str) -> bool {
    YAML11_BOOL_WORDS.contains(&s)
}

fn placeholder(marker: &str, word: &str) -> String {
    format!("{}{}{}", marker, word, marker)
}

/// A marker that no string or key of the tree contains.
fn unused_marker(value: &Value) -> String {
    let mut marker = MARKER_STEM.to_string();
    loop {
        let mut taken = false;
        visit_strings(value, &mut |s| taken |= s.contains(marker.as_str()));
        if !taken {
            return marker;
        }
        marker.push('_');
    }
}

/// Call `f` on every string scalar and mapping key.
fn visit_strings(value: &Value, f: &mut impl FnMut(&str)) {
    match value {
        Value::String(s) => f(s),
        Value::Sequence(items) => items.iter().for_each(|item| visit_strings(item, f)),
        Value::Mapping(mapping) => {
            for (key, item) in mapping.iter() {
                f(key);
                visit_strings(item, f);
            }
        }
        _ => {}
    }
}

fn mask_str(s: &str, marker: &str) -> String {
    if is_bool_word(s) {
        placeholder(marker, s)
    } else {
        s.to_string()
    }
}

fn mask(value: &Value, marker: &str) -> Value {
    match value {
        Value::String(s) => Value::String(mask_str(s, marker)),
        Value::Sequence(items) => Value::Sequence(items.iter().map(|item| mask(item, marker)).collect()),
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .iter()
                .map(|(key, item)| (mask_str(key, marker), mask(item, marker)))
                .collect::<Mapping>(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_strings_unchanged() {
        let value = Value::Mapping(Mapping::new().with("name", "web").with("image", "nginx:1.25"));
        assert_eq!(to_yaml(&value).unwrap(), "name: web\nimage: nginx:1.25\n");
    }

    #[test]
    fn test_yaml11_bool_words_are_quoted() {
        let value = Value::Mapping(
            Mapping::new()
                .with("enabled", "on")
                .with("answer", "yes")
                .with("y", "N"),
        );

        let yaml = to_yaml(&value).unwrap();
        assert_eq!(yaml, "enabled: 'on'\nanswer: 'yes'\n'y': 'N'\n");

        let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_real_bools_stay_plain() {
        let value = Value::Mapping(Mapping::new().with("on", true).with("mode", "off"));
        assert_eq!(to_yaml(&value).unwrap(), "'on': true\nmode: 'off'\n");
    }

    #[test]
    fn test_only_whole_words_are_quoted() {
        let value = Value::from(vec!["off", "offset", "nope", "On"]);
        assert_eq!(to_yaml(&value).unwrap(), "- 'off'\n- offset\n- nope\n- 'On'\n");
    }

    #[test]
    fn test_strings_containing_the_marker() {
        let tricky = format!("{}on{}", MARKER_STEM, MARKER_STEM);
        let value = Value::Mapping(Mapping::new().with("a", tricky.as_str()).with("b", "on"));

        let yaml = to_yaml(&value).unwrap();
        assert!(yaml.contains("b: 'on'\n"));

        let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, value);
    }
}
