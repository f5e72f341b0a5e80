/// Renders a list of same-typed integer components as a dotted string.
///
/// The components are collected into an array, so mixing types is rejected
/// when the program is compiled.
///
/// ```rust
/// use ip_printer::dotted;
///
/// assert_eq!(dotted!(192, 168, 0, 1), "192.168.0.1");
/// assert_eq!(dotted!(), "");
/// ```
///
/// ```compile_fail
/// ip_printer::dotted!(1u8, 2u16);
/// ```
#[macro_export]
macro_rules! dotted {
    () => {
        ::std::string::String::new()
    };

    ($($component:expr),+ $(,)?) => {
        $crate::to_dotted(&[$($component),+])
    };
}

/// Prints a list of same-typed integer components as one dotted line.
///
/// ```rust
/// use ip_printer::print_ip;
///
/// print_ip!(127, 0, 0, 1); // 127.0.0.1
/// print_ip!(); // prints nothing
/// ```
#[macro_export]
macro_rules! print_ip {
    () => {
        $crate::print_ip::<[u8; 0]>([])
    };

    ($($component:expr),+ $(,)?) => {
        $crate::print_ip([$($component),+])
    };
}
