/// An error built from a formatted message.
///
/// Mostly used as context wrapped around a more specific error, for example to
/// name the statement whose dependencies could not be computed.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn from_args(args: core::fmt::Arguments<'_>) -> AdhocError {
        let message = match args.as_str() {
            Some(message) => message.into(),
            None => args.to_string().into_boxed_str(),
        };

        AdhocError { message }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}
