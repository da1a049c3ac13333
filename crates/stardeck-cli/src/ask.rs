//! Free-form navigation phrases ("show me mars", "mission of the day").

use stardeck_core::{interpret_command, CommandIntent};

use crate::context::Context;

/// Interpret `phrase` and run the matching view.
///
/// # Errors
///
/// Returns an error if the view the phrase selects fails to load.
pub(crate) async fn run_ask(ctx: &Context, phrase: &str) -> anyhow::Result<()> {
    let intent = interpret_command(phrase);
    tracing::debug!(phrase, ?intent, "interpreted phrase");
    println!("{}", intent.reply());

    match intent {
        CommandIntent::DailyPicture => crate::apod::run_apod(ctx, false).await,
        CommandIntent::ShowDestination(_) | CommandIntent::ShowAll => {
            let category = intent.category().unwrap_or(stardeck_core::ALL_CATEGORIES);
            println!();
            crate::missions::run_missions_list(ctx, "", category).await
        }
        CommandIntent::Unrecognized => {
            println!("try \"show me mars\", \"all missions\", or \"mission of the day\"");
            Ok(())
        }
    }
}
