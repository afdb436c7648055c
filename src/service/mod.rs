pub mod relay;

pub use relay::{CompletionClient, OpenRouterClient, RelayService};
