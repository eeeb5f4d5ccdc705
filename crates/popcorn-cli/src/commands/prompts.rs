use color_eyre::Result;
use dialoguer::{Input, Select};

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new().with_prompt(prompt).allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for a star rating, 1-10. Re-prompts on invalid input.
pub fn prompt_rating(prompt: &str, default: Option<u8>) -> Result<u8> {
    loop {
        let mut input_builder = Input::<String>::new().with_prompt(prompt);
        if let Some(default_value) = default {
            input_builder = input_builder.default(default_value.to_string());
        }
        let input_str = input_builder
            .interact()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))?;

        match input_str.trim().parse::<u8>() {
            Ok(rating) if (1..=10).contains(&rating) => return Ok(rating),
            _ => {
                eprintln!("Please enter a number from 1 to 10.");
                continue;
            }
        }
    }
}

/// Single-choice menu. Returns the index of the picked item.
pub fn prompt_select(prompt: &str, items: &[String]) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}
