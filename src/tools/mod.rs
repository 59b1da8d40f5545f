use std::fmt::Debug;

pub mod env_args;
pub mod web;

/// For `map_err`: log the error, then hand back `value_to_return` in its place.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    move |error| {
        error!("{error:?}");
        value_to_return
    }
}

/// Same as [log_error_and_return], with `context` telling what was being done.
pub fn log_message_and_return<E: Debug, T>(
    context: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |error| {
        error!("{context} [error: {error:?}]");
        value_to_return
    }
}

#[cfg(test)]
mod tests {
    use crate::tools::{log_error_and_return, log_message_and_return};
    use crate::web::error::WebError;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn should_log_error_and_return_value() {
        init();

        let expected_return_value = "test";
        let result = log_error_and_return(expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }

    #[test]
    fn should_return_value_in_map_err() {
        init();

        let result: Result<u16, WebError> =
            Err::<u16, &str>("refused").map_err(log_error_and_return(WebError::ConnectionFailed));

        assert_eq!(Err(WebError::ConnectionFailed), result);
    }

    #[test]
    fn should_log_message_and_return_value() {
        init();

        let expected_return_value = 502;
        let result =
            log_message_and_return("Backend is unreachable", expected_return_value)("refused");

        assert_eq!(expected_return_value, result);
    }
}
