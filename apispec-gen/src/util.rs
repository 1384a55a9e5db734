/// Apply `action` to a fresh `T::default()` and hand back the result.
///
/// This is the delegated configuration used for nested settings such as
/// [crate::Server] and [crate::Oauth2SchemeConfig]:
///
/// ```
/// use apispec_gen::{configure, Server};
///
/// let server: Server = configure(|s: &mut Server| s.url = "https://api.example.com".to_string());
/// assert_eq!(server.url, "https://api.example.com");
/// ```
pub fn configure<T: Default>(action: impl FnOnce(&mut T)) -> T {
    let mut value = T::default();
    action(&mut value);
    value
}
