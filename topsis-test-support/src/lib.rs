//! Shared test utilities used across topsis crates.

pub mod fixtures {
    //! Decision tables with known rankings.

    /// Four phones scored on price, storage, camera and looks, as CSV.
    pub const MOBILE_CSV: &str = "\
Model,Price,Storage,Camera,Looks
A,250,16,12,5
B,200,16,8,3
C,300,32,16,4
D,275,32,8,4
";

    /// Weights for [`MOBILE_CSV`].
    pub const MOBILE_WEIGHTS: &str = "0.25,0.25,0.25,0.25";

    /// Impacts for [`MOBILE_CSV`]: looks is a cost criterion.
    pub const MOBILE_IMPACTS: &str = "+,+,+,-";

    /// Expected `(identifier, closeness score, rank)` for [`MOBILE_CSV`],
    /// derived analytically from the TOPSIS formulas.
    pub const MOBILE_EXPECTED: [(&str, f64, usize); 4] = [
        ("A", 0.307_893_640_447_955_4, 4),
        ("B", 0.326_234_390_410_958_6, 3),
        ("C", 0.809_519_705_174_964_5, 1),
        ("D", 0.497_667_464_081_457_2, 2),
    ];

    /// Absolute tolerance for comparing scores against [`MOBILE_EXPECTED`].
    pub const SCORE_TOLERANCE: f64 = 1e-12;
}

pub mod tracing {
    //! A layer that captures closed spans and emitted events so tests can
    //! assert on instrumentation.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Field values keyed by field name, rendered as strings.
    pub type Fields = HashMap<String, String>;

    /// Captures spans on close and events on emission.
    ///
    /// Clone the layer before installing it; clones share storage.
    ///
    /// # Examples
    /// ```
    /// use topsis_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     let _span = tracing::info_span!("demo", answer = 42).entered();
    /// });
    /// let span = layer.span("demo").expect("span was recorded");
    /// assert_eq!(span.fields.get("answer").map(String::as_str), Some("42"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// The first closed span called `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<SpanRecord> {
            self.spans().into_iter().find(|span| span.name == name)
        }

        /// The first event whose `message` field equals `message`.
        #[must_use]
        pub fn event(&self, message: &str) -> Option<EventRecord> {
            self.events()
                .into_iter()
                .find(|event| event.message() == Some(message))
        }
    }

    /// A closed span.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: Fields,
    }

    /// An emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Event fields, `message` included.
        pub fields: Fields,
    }

    impl EventRecord {
        /// The event's message, if it has one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    struct OpenSpan {
        name: String,
        fields: Fields,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = Fields::new();
            attrs.record(&mut Collector(&mut fields));
            span.extensions_mut().insert(OpenSpan {
                name: attrs.metadata().name().to_owned(),
                fields,
            });
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut Collector(&mut open.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
                return;
            };
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(SpanRecord {
                    name: open.name,
                    fields: open.fields,
                });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut Collector(&mut fields));
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(EventRecord {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    fields,
                });
        }
    }

    struct Collector<'a>(&'a mut Fields);

    impl Collector<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    macro_rules! record_display {
        ($($method:ident: $ty:ty),+ $(,)?) => {
            $(
                fn $method(&mut self, field: &Field, value: $ty) {
                    self.put(field, value.to_string());
                }
            )+
        };
    }

    impl Visit for Collector<'_> {
        record_display! {
            record_f64: f64,
            record_i64: i64,
            record_u64: u64,
            record_i128: i128,
            record_u128: u128,
            record_bool: bool,
            record_str: &str,
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }
    }
}
