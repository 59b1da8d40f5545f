#[cfg(test)]
use std::cell::RefCell;
use std::ops::Deref;

/// One or several names under which a single arg may be passed, like `-u` and `--backend-url`.
pub struct ArgNames<'a>(Vec<&'a str>);

impl<'a> From<&'a str> for ArgNames<'a> {
    fn from(name: &'a str) -> Self {
        ArgNames(vec![name])
    }
}

impl<'a> From<Vec<&'a str>> for ArgNames<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        ArgNames(names)
    }
}

impl<'a> Deref for ArgNames<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Look for an arg passed as `name=value` and return its value.
/// Only the first `=` separates the name from the value.
///
/// Args are process-wide: tests calling this function, directly or not,
/// should be wrapped in [with_env_args].
pub fn retrieve_arg_value<'a, A>(arg_names: A) -> Option<String>
where
    A: Into<ArgNames<'a>>,
{
    let arg_names = arg_names.into();
    get_env_args().into_iter().find_map(|arg| {
        let (name, value) = arg.split_once('=')?;
        arg_names
            .iter()
            .any(|arg_name| *arg_name == name)
            .then(|| value.to_owned())
    })
}

/// Same as [retrieve_arg_value], for an arg the app can't do without.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    std::env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while a test runs, see [with_env_args].
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

/// Run `function` as if `args` had been passed to the app, on top of the real args.
#[cfg(test)]
pub fn with_env_args<F, T>(mut args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|env_args| {
        args.extend(std::env::args());
        let previous_args = env_args.replace(args);
        let result = function();
        env_args.replace(previous_args);
        result
    })
}

#[cfg(test)]
pub mod tests {
    use parameterized::{ide, parameterized};

    use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value, with_env_args};

    ide!();

    #[parameterized(
        args = {vec!["--port=8080".to_owned()], vec!["--backend-url=http://127.0.0.1:9000".to_owned()], vec!["-u=http://backend".to_owned()], vec!["--backend-url=".to_owned()], vec!["--other-arg=wrong".to_owned()]},
        arg_names = {vec!["--port"], vec!["-u", "--backend-url"], vec!["-u", "--backend-url"], vec!["-u", "--backend-url"], vec!["-u", "--backend-url"]},
        expected_result = {Some("8080".to_owned()), Some("http://127.0.0.1:9000".to_owned()), Some("http://backend".to_owned()), Some(String::new()), None}
    )]
    fn should_retrieve_arg_value(
        args: Vec<String>,
        arg_names: Vec<&str>,
        expected_result: Option<String>,
    ) {
        let result = with_env_args(args, || retrieve_arg_value(arg_names));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_keep_equal_signs_in_value() {
        let args = vec!["--backend-url=http://backend/?a=b".to_owned()];

        let result = with_env_args(args, || retrieve_arg_value("--backend-url"));

        assert_eq!(Some("http://backend/?a=b".to_owned()), result);
    }

    #[test]
    fn should_retrieve_expected_arg_value() {
        let arg_name = "--backend-url";
        let arg_value = "http://localhost:9000";
        let error = "error!";
        let args = vec![format!("{arg_name}={arg_value}")];

        let result = with_env_args(args, || retrieve_expected_arg_value(arg_name, error)).unwrap();

        assert_eq!(arg_value, result);
    }

    #[test]
    fn should_fail_to_retrieve_expected_arg_value() {
        let arg_name = "--missing-arg";
        let error = "error!";

        let result = retrieve_expected_arg_value(arg_name, error).unwrap_err();

        assert_eq!(error, result);
    }
}
