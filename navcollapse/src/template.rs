/// Substitute positional `{0}`, `{1}`, ... placeholders.
///
/// Each index replaces only its first occurrence, in index order, so text
/// inserted for `{0}` can itself be matched by `{1}`. Placeholders without an
/// argument are left as they are. Nothing is escaped.
pub fn format_template<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut out = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        out = out.replacen(&format!("{{{index}}}"), arg.as_ref(), 1);
    }
    out
}
