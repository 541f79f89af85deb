// src/macros.rs

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`. Used wherever
/// borrowed text from the parsed tree or the options becomes owned.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String`. Export file names are
/// built with it: `join!(&stem, ".", format.ext())` gives `strings.csv`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $(
            out.push_str($rest);
        )+
        out
    }};
}
