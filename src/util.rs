/// Returns the name of `T` with module paths stripped from every path in it.
pub fn short_type_name<T: ?Sized>() -> String {
    strip_paths(std::any::type_name::<T>())
}

/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn strip_paths(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    // Where the path currently being written started in `out`.
    let mut path_start = 0;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                // `<T as Trait>::Assoc` keeps its separator.
                if out.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
                    out.truncate(path_start);
                } else {
                    out.push_str("::");
                    path_start = out.len();
                }
            }
            c if c.is_alphanumeric() || c == '_' => out.push(c),
            c => {
                out.push(c);
                path_start = out.len();
            }
        }
    }

    out
}
