/// Build a message from a template, substituting `{key}` placeholders.
///
/// ```
/// use reuni_messages::{msg, MESSAGES};
///
/// let line = msg!(MESSAGES.config_http_error, status = "400", message = "bad request");
/// assert_eq!(line, "HTTP Error 400: bad request");
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr) => {
        $crate::builder::MessageBuilder::new($template).build()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut builder = $crate::builder::MessageBuilder::new($template);
            $(
                builder = builder.var(stringify!($key), $value);
            )+
            builder.build()
        }
    };
}
