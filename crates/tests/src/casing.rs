use casing::{camel, pascal};

#[test]
fn separators() {
  assert_eq!(camel("foo-bar"), "fooBar");
  assert_eq!(camel("foo_bar"), "fooBar");
  assert_eq!(camel("foo.bar"), "fooBar");
  assert_eq!(camel("foo bar"), "fooBar");
  assert_eq!(camel("--foo-bar"), "fooBar");
  assert_eq!(camel("--foo.bar"), "fooBar");
}

#[test]
fn existing_case() {
  assert_eq!(camel("Foo-Bar"), "fooBar");
  assert_eq!(camel("fooBar"), "fooBar");
  assert_eq!(camel("FOOBar"), "fooBar");
}

#[test]
fn pascal_case() {
  assert_eq!(pascal("foo-bar"), "FooBar");
  assert_eq!(pascal("Foo-Bar"), "FooBar");
  assert_eq!(pascal("--foo.bar"), "FooBar");
}

#[test]
fn digits() {
  assert_eq!(camel("foo2bar"), "foo2Bar");
  assert_eq!(camel("grid-2col"), "grid2Col");
}

#[test]
fn tiny() {
  assert_eq!(camel(""), "");
  assert_eq!(camel("   "), "");
  assert_eq!(camel("A"), "a");
  assert_eq!(pascal("a"), "A");
}
