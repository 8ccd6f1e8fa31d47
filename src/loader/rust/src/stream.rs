/* src/loader/rust/src/stream.rs */

/// The host's load stream: an append-only sequence of include fragments.
///
/// `push_fragment` is synchronous. When it returns, the fragment is part of the
/// stream and the next module may be emitted. Implementations never reorder
/// or rewind.
pub trait LoadStream {
  fn push_fragment(&mut self, fragment: &str);
}

/// Concatenated page text.
impl LoadStream for String {
  fn push_fragment(&mut self, fragment: &str) {
    self.push_str(fragment);
  }
}

/// One entry per emitted fragment.
impl LoadStream for Vec<String> {
  fn push_fragment(&mut self, fragment: &str) {
    self.push(fragment.to_string());
  }
}

impl<S: LoadStream + ?Sized> LoadStream for &mut S {
  fn push_fragment(&mut self, fragment: &str) {
    (**self).push_fragment(fragment);
  }
}

/// Hands each fragment to a callback and waits for it to return before the
/// next module is emitted. Use it to activate modules one at a time, e.g. to
/// evaluate module N completely before module N+1 is requested.
pub struct Sequential<F> {
  activate: F,
  count: usize,
}

impl<F: FnMut(usize, &str)> Sequential<F> {
  pub fn new(activate: F) -> Self {
    Self { activate, count: 0 }
  }

  /// Number of fragments activated so far.
  pub fn count(&self) -> usize {
    self.count
  }
}

impl<F: FnMut(usize, &str)> LoadStream for Sequential<F> {
  fn push_fragment(&mut self, fragment: &str) {
    (self.activate)(self.count, fragment);
    self.count += 1;
  }
}
