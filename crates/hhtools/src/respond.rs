use crate::prelude::{println, *};
use colored::Colorize;
use hhtools_core::contact::{format_phone, ContactMessage};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct Options {
    /// Applicant name (more than 2 characters)
    #[arg(long)]
    pub name: String,

    /// Contact email address
    #[arg(long)]
    pub email: String,

    /// Contact phone number; digits are formatted as +7 (XXX) XXX XXXX
    #[arg(long)]
    pub phone: String,

    /// Free-form comment
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: Options, global: crate::Global) -> Result<()> {
    let phone = format_phone(&options.phone);

    if global.verbose {
        println!("Formatted phone: {}", phone);
    }

    let message = ContactMessage {
        name: options.name,
        email: options.email,
        phone,
        comment: options.comment,
    };

    message
        .validate()
        .map_err(|err| eyre!("Message rejected: {}", err))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&message)?);
    } else {
        println!("{}", "Message is valid.".green());
        println!();
        println!("{}", message.summary());
    }

    Ok(())
}
