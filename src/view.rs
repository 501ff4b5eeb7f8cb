use maud::{Markup, Render, html};

/// Value shown before the client bundle hydrates the counter.
pub const INITIAL_COUNT: i64 = 0;

/// The one component in this demo. Created fresh for every render and
/// discarded after serialization; nothing survives across requests.
pub struct Counter {
    pub count: i64,
}

impl Default for Counter {
    fn default() -> Self {

        Counter { count: INITIAL_COUNT }

    }
}

impl Render for Counter {
    fn render(&self) -> Markup {

        // static markup only; the click handler is attached
        // client-side by the hydration bundle
        html! {
            div id="counter" {
                p { "Count: " (self.count) }
                button { "Increment" }
            }
        }

    }
}
