//! HTML rendering for the decoded bind forest.
//!
//! Rendering is a pure, stateless, depth-first stringification. Each public
//! entry point allocates one accumulating buffer and the `push_*` helpers
//! append fragments to it in pre-order, left to right. Every node type gets
//! a fixed CSS class hook (`Chord`, `Chord__key`, `Bind`, `Bind__output`,
//! `EnterMode`) matching the companion stylesheet's selectors.
//!
//! The exact fragment bytes, including the interior padding spaces and the
//! final `<html>` tag, are part of the output contract and must not drift.

use crate::model::{Action, Bind, Chord};

/// Placeholder text emitted into the `<pre>` block when a bind has no
/// output. Absent output has always rendered as this literal; stylesheets
/// select on it.
const ABSENT_OUTPUT: &str = "None";

/// Relative path of the stylesheet the document links to. Its content is an
/// external collaborator and out of scope.
const STYLESHEET_HREF: &str = "style.css";

/// Renders a chord to its HTML fragment.
#[must_use]
pub fn render_chord(chord: &Chord) -> String {
    let mut out = String::new();
    push_chord(chord, &mut out);
    out
}

/// Renders a single bind to its HTML fragment.
///
/// The fragment holds the chord and the output block only. When the bind's
/// action enters a mode, the mode's own binds are not part of this fragment;
/// they only appear where something renders the mode itself (see
/// [`render_mode`]).
#[must_use]
pub fn render_bind(bind: &Bind) -> String {
    let mut out = String::new();
    push_bind(bind, &mut out);
    out
}

/// Renders a mode: the concatenation of its binds' fragments, in order,
/// inside an `EnterMode` container.
#[must_use]
pub fn render_mode(binds: &[Bind]) -> String {
    let mut out = String::new();
    push_mode(binds, &mut out);
    out
}

/// Renders an action. `EnterMode` delegates to the mode body; `None`
/// renders nothing.
#[must_use]
pub fn render_action(action: &Action) -> String {
    let mut out = String::new();
    push_action(action, &mut out);
    out
}

/// Renders the full HTML document for a forest of root binds.
///
/// The skeleton is fixed: doctype, a head with one stylesheet link, a body
/// holding every root bind's fragment concatenated on a single line. The
/// document has always ended with an opening `<html>` tag where a closing
/// one would belong; it is reproduced as-is for output compatibility.
#[must_use]
pub fn render_document(binds: &[Bind]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<head>\n");
    out.push_str("<link rel=\"stylesheet\" href=\"");
    out.push_str(STYLESHEET_HREF);
    out.push_str("\" />\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    for bind in binds {
        push_bind(bind, &mut out);
    }
    out.push('\n');
    out.push_str("</body>\n");
    out.push_str("<html>\n");
    out
}

fn push_chord(chord: &Chord, out: &mut String) {
    out.push_str("   <div class=\"Chord\">");
    for label in chord.modifiers.labels() {
        out.push_str("    <span class=\"Chord__key\">");
        out.push_str(label);
        out.push_str("</span>");
    }
    out.push_str("    <span class=\"Chord__key\">");
    out.push_str(&chord.key);
    out.push_str("</span> </div>");
}

fn push_bind(bind: &Bind, out: &mut String) {
    out.push_str("<div class=\"Bind\">    ");
    push_chord(&bind.chord, out);
    out.push_str("    <span class=\"Bind__output\">        <pre>");
    push_output(bind.output.as_deref(), out);
    out.push_str("</pre>    </span></div>");
}

/// Appends the preformatted output text: trimmed of surrounding whitespace,
/// with every interior newline deleted (not replaced by a space). Absent
/// output interpolates the pinned placeholder.
fn push_output(output: Option<&str>, out: &mut String) {
    match output {
        Some(text) => {
            for segment in text.trim().split('\n') {
                out.push_str(segment);
            }
        }
        None => out.push_str(ABSENT_OUTPUT),
    }
}

fn push_mode(binds: &[Bind], out: &mut String) {
    out.push_str("<div class=\"EnterMode\">");
    for bind in binds {
        push_bind(bind, out);
    }
    out.push_str("</div>");
}

fn push_action(action: &Action, out: &mut String) {
    match action {
        Action::EnterMode { binds } => push_mode(binds, out),
        Action::None => {}
    }
}
