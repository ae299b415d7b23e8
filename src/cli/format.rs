//! Format output dispatch helpers

/// Macro to dispatch output by format with minimal boilerplate.
///
/// # Examples
///
/// ```rust,ignore
/// output_by_format!(format,
///     json => { print_json(&report)? },
///     human => { print_human(&report); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block) => {
        match $format {
            gsa_core::format::OutputFormat::Json => $json,
            gsa_core::format::OutputFormat::Human => $human,
        }
    };
}
