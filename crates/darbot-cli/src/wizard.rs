//! Interactive wizard flow.
//!
//! Collects setup preferences with terminal prompts; every answer can be
//! pre-filled so the flow also runs without a TTY.

use anyhow::Result;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};

use darbot_core::runtime::RuntimeChoice;
use darbot_core::setup::Preferences;

/// Answers supplied ahead of time that skip their prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefilledAnswers {
    pub install_method: Option<RuntimeChoice>,
    pub configure_editor: Option<bool>,
    pub configure_assistant: Option<bool>,
    /// Accept every default without prompting.
    pub yes: bool,
}

pub struct WizardFlow {
    prefilled: PrefilledAnswers,
    theme: ColorfulTheme,
}

impl WizardFlow {
    pub fn new(prefilled: PrefilledAnswers) -> Self {
        Self {
            prefilled,
            theme: ColorfulTheme::default(),
        }
    }

    /// Collect preferences, prompting only for unanswered questions.
    pub fn collect(&self) -> Result<Preferences> {
        let install_method = self.prompt_install_method()?;
        let configure_editor = self.prompt_confirm(
            "Configure VS Code MCP integration?",
            self.prefilled.configure_editor,
        )?;
        let configure_assistant = self.prompt_confirm(
            "Configure Claude Desktop integration?",
            self.prefilled.configure_assistant,
        )?;

        Ok(Preferences {
            install_method,
            configure_editor,
            configure_assistant,
        })
    }

    fn prompt_install_method(&self) -> Result<RuntimeChoice> {
        if let Some(choice) = self.prefilled.install_method {
            return Ok(choice);
        }
        if self.prefilled.yes {
            return Ok(RuntimeChoice::Uv);
        }

        let options = vec![
            "UV (recommended - faster, modern)",
            "Standard Python (pip + venv)",
        ];
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Choose installation method")
            .items(&options)
            .default(0)
            .interact()?;

        Ok(match selection {
            0 => RuntimeChoice::Uv,
            _ => RuntimeChoice::Python,
        })
    }

    fn prompt_confirm(&self, prompt: &str, prefilled: Option<bool>) -> Result<bool> {
        if let Some(answer) = prefilled {
            return Ok(answer);
        }
        if self.prefilled.yes {
            return Ok(true);
        }

        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(true)
            .interact()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_answers_skip_prompts() {
        let prefilled = PrefilledAnswers {
            install_method: Some(RuntimeChoice::Python),
            configure_editor: Some(false),
            configure_assistant: Some(true),
            yes: false,
        };

        let prefs = WizardFlow::new(prefilled).collect().unwrap();

        assert_eq!(prefs.install_method, RuntimeChoice::Python);
        assert!(!prefs.configure_editor);
        assert!(prefs.configure_assistant);
    }

    #[test]
    fn yes_flag_accepts_defaults() {
        let prefilled = PrefilledAnswers {
            yes: true,
            ..Default::default()
        };

        let prefs = WizardFlow::new(prefilled).collect().unwrap();

        assert_eq!(prefs.install_method, RuntimeChoice::Uv);
        assert!(prefs.configure_editor);
        assert!(prefs.configure_assistant);
    }

    #[test]
    fn prefilled_answers_override_yes() {
        let prefilled = PrefilledAnswers {
            install_method: Some(RuntimeChoice::Python),
            configure_editor: Some(false),
            configure_assistant: None,
            yes: true,
        };

        let prefs = WizardFlow::new(prefilled).collect().unwrap();

        assert_eq!(prefs.install_method, RuntimeChoice::Python);
        assert!(!prefs.configure_editor);
        assert!(prefs.configure_assistant);
    }
}
