//! Output sinks for rendered markup.
//!
//! A sink is the host's "inject this markup unescaped" primitive. The
//! renderer only ever hands it complete fragments, in page order.

/// Accepts raw markup fragments for unescaped display
pub trait MarkupSink {
    fn emit(&mut self, markup: &str);
}

impl<F> MarkupSink for F
where
    F: FnMut(&str),
{
    fn emit(&mut self, markup: &str) {
        self(markup)
    }
}

/// Appends every fragment to the string.
impl MarkupSink for String {
    fn emit(&mut self, markup: &str) {
        self.push_str(markup);
    }
}

/// Keeps one entry per fragment.
impl MarkupSink for Vec<String> {
    fn emit(&mut self, markup: &str) {
        self.push(markup.to_string());
    }
}
