//! Main menu options

use std::str::FromStr;

use super::input::InputError;

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Create,
    List,
    Update,
    Delete,
    Export,
    Exit,
}

impl MenuOption {
    /// Every option, in display order
    pub const ALL: [MenuOption; 6] = [
        MenuOption::Create,
        MenuOption::List,
        MenuOption::Update,
        MenuOption::Delete,
        MenuOption::Export,
        MenuOption::Exit,
    ];

    /// Number typed to pick this option
    pub fn key(&self) -> u8 {
        match self {
            MenuOption::Create => 1,
            MenuOption::List => 2,
            MenuOption::Update => 3,
            MenuOption::Delete => 4,
            MenuOption::Export => 5,
            MenuOption::Exit => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Create => "Entrada de dados (novo registro)",
            MenuOption::List => "Visualizar dados",
            MenuOption::Update => "Atualizar dados",
            MenuOption::Delete => "Deletar dados",
            MenuOption::Export => "Exportar dados para CSV (para R)",
            MenuOption::Exit => "Sair do programa",
        }
    }
}

impl FromStr for MenuOption {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: i64 = s.trim().parse().map_err(|_| InputError::NotANumber)?;
        Self::ALL
            .into_iter()
            .find(|option| i64::from(option.key()) == key)
            .ok_or(InputError::InvalidSelection)
    }
}
