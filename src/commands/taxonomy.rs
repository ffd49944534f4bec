use crate::db::taxonomy::Taxonomy;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TaxonomyArgs {
    /// Show the activities of this category instead of the category list
    #[arg(long)]
    category: Option<String>,
}

pub fn cmd(args: TaxonomyArgs) -> Result<()> {
    let mut taxonomy = Taxonomy::new()?;

    match args.category {
        Some(title) => {
            let category = taxonomy
                .find_category(&title)?
                .ok_or_else(|| msg_error_anyhow!(Message::CategoryNotFound(title)))?;
            let activities = taxonomy.list_activities(category.id)?;
            View::activities(&activities)
        }
        None => {
            let categories = taxonomy.list_categories()?;
            View::categories(&categories)
        }
    }
}
