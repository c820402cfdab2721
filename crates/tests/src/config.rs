use config::{PackageConfig, ShortClasses};

fn flag(json: &str) -> ShortClasses {
  serde_json::from_str(json).expect("flag should deserialize")
}

#[test]
fn short_classes_shapes() {
  let cases = [
    ("false", false),
    ("true", true),
    (r#"{"js":false,"pcss":true}"#, false),
    (r#"{"js":true,"pcss":false}"#, true),
    (r#"{"js":true,"pcss":true}"#, true),
  ];
  for (json, js) in cases {
    assert_eq!(flag(json).js(), js, "{json}");
  }
  assert!(flag(r#"{"js":false,"pcss":true}"#).pcss());
  assert!(!flag(r#"{"js":true,"pcss":false}"#).pcss());
  assert!(!flag("false").pcss());
}

#[test]
fn defaults() {
  let cfg = PackageConfig::default();
  assert_eq!(cfg.short_css_classes, ShortClasses::All(true));
  assert!(cfg.brotli_files);
  assert!(!cfg.css_enums);
  assert_eq!(cfg.css_folder, "./css/dist/");
  assert_eq!(cfg.js_path, "./js");
  assert_eq!(cfg.main_css_file_name, "front-end");
  assert_eq!(cfg.pcss_watch, ["pcss", "template-parts"]);
  assert_eq!(cfg.theme_path, "./");
  assert_eq!(cfg.url, "http://localhost");
}

#[test]
fn package_json_subset() {
  // A project's package.json: mostly unrelated fields, a few of ours, the
  // rest defaulted.
  let cfg: PackageConfig = serde_json::from_str(
    r#"{
      "name": "my-theme",
      "version": "1.2.0",
      "dependencies": {"postcss": "^8"},
      "shortCssClasses": {"js": true, "pcss": false},
      "css_folder": "./css/min/",
      "pcssWatch": ["pcss"]
    }"#,
  )
  .expect("config should deserialize");
  assert!(cfg.short_css_classes.js());
  assert!(!cfg.short_css_classes.pcss());
  assert_eq!(cfg.css_folder, "./css/min/");
  assert_eq!(cfg.pcss_watch, ["pcss"]);
  assert_eq!(cfg.js_path, "./js");
}
