//! The greeting text served at the root path.

/// Greeting returned by [`GreetingService::get_hello`].
pub const HELLO_WORLD: &str = "Hello World!";

/// Stateless source of the root greeting.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingService;

impl GreetingService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_hello(&self) -> &'static str {
        HELLO_WORLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_is_constant() {
        let service = GreetingService::new();
        assert_eq!(service.get_hello(), "Hello World!");
        assert_eq!(service.get_hello(), service.get_hello());
    }
}
