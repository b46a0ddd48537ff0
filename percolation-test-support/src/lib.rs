//! Shared test utilities used across percolation crates.

pub mod profile;

pub mod tracing {
    //! Span and event capture for asserting structured diagnostics in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer that stores every event and closed span it sees so tests can
    /// inspect them after the instrumented code has run.
    ///
    /// # Examples
    /// ```
    /// use percolation_test_support::tracing::CaptureLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let capture = CaptureLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(capture.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::info!(side = 3, "grid ready");
    /// });
    /// let events = capture.events();
    /// assert_eq!(events.len(), 1);
    /// assert_eq!(events[0].field("side"), Some("3"));
    /// ```
    #[derive(Clone, Default)]
    pub struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
        spans: Arc<Mutex<Vec<CapturedSpan>>>,
    }

    impl CaptureLayer {
        /// Returns the spans closed so far, in closing order, with the fields
        /// recorded at creation and through `Span::record`.
        ///
        /// # Examples
        /// ```
        /// use percolation_test_support::tracing::CaptureLayer;
        /// use tracing_subscriber::layer::SubscriberExt;
        ///
        /// let capture = CaptureLayer::default();
        /// let subscriber = tracing_subscriber::registry().with(capture.clone());
        /// tracing::subscriber::with_default(subscriber, || {
        ///     let span = tracing::info_span!("grid.open", row = tracing::field::Empty);
        ///     span.record("row", 2_u64);
        /// });
        /// let spans = capture.spans_named("grid.open");
        /// assert_eq!(spans.len(), 1);
        /// assert_eq!(spans[0].field("row"), Some("2"));
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<CapturedSpan> {
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the closed spans named `name`.
        #[must_use]
        pub fn spans_named(&self, name: &str) -> Vec<CapturedSpan> {
            self.spans()
                .into_iter()
                .filter(|span| span.name == name)
                .collect()
        }

        /// Returns a snapshot of the captured events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<CapturedEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the captured events whose message equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<CapturedEvent> {
            self.events()
                .into_iter()
                .filter(|event| event.field("message") == Some(message))
                .collect()
        }
    }

    /// A single captured event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedEvent {
        /// Level the event was emitted at.
        pub level: Level,
        /// Target from the event metadata.
        pub target: String,
        /// Recorded fields rendered as strings, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl CapturedEvent {
        /// Returns the rendered value of the named field.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    /// A closed span and the fields it accumulated.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedSpan {
        /// Span name from the metadata.
        pub name: String,
        /// Recorded fields rendered as strings; empty fields are absent.
        pub fields: HashMap<String, String>,
    }

    impl CapturedSpan {
        /// Returns the rendered value of the named field.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    struct OpenSpan {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut open = OpenSpan {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldCollector {
                fields: &mut open.fields,
            });
            span.extensions_mut().insert(open);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            if let Some(open) = extensions.get_mut::<OpenSpan>() {
                values.record(&mut FieldCollector {
                    fields: &mut open.fields,
                });
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
                .push(CapturedSpan {
                    name: open.name,
                    fields: open.fields,
                });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldCollector {
                fields: &mut fields,
            });
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(CapturedEvent {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    fields,
                });
        }
    }

    struct FieldCollector<'a> {
        fields: &'a mut HashMap<String, String>,
    }

    impl Visit for FieldCollector<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.fields
                .insert(field.name().to_owned(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.fields
                .insert(field.name().to_owned(), value.to_owned());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.fields
                .insert(field.name().to_owned(), value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.fields
                .insert(field.name().to_owned(), value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.fields
                .insert(field.name().to_owned(), value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.fields
                .insert(field.name().to_owned(), value.to_string());
        }
    }
}
