// Compile-time invariant check, fails the build when the condition is false
#[macro_export]
macro_rules! static_assert {
    ($cond:expr, $msg:expr $(,)?) => {
        const _: () = assert!($cond, $msg);
    };
    ($cond:expr $(,)?) => {
        const _: () = assert!($cond);
    };
}
