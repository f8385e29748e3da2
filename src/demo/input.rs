//! Line-based input parsing for the terminal demo.

use dullest_dungeon::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Attack,
    SwitchWeapon,
    /// 0-based roster index.
    ChooseWeapon(usize),
    Reset,
    Dump,
    Quit,
}

/// Parse one input line. Weapon numbers are typed 1-based, as shown in the menu.
pub fn parse_command(input: &str) -> Option<Command> {
    let command = match input.trim().to_ascii_lowercase().as_str() {
        "\x1b[a" | "up" | "k" => Command::Move(Direction::Up),
        "\x1b[b" | "down" | "j" => Command::Move(Direction::Down),
        "\x1b[d" | "left" | "h" => Command::Move(Direction::Left),
        "\x1b[c" | "right" | "l" => Command::Move(Direction::Right),
        "a" | "attack" => Command::Attack,
        "s" | "switch" => Command::SwitchWeapon,
        "r" | "reset" => Command::Reset,
        "dump" => Command::Dump,
        "q" | "quit" | "\x1b" => Command::Quit,
        other => {
            let number: usize = other.parse().ok()?;
            Command::ChooseWeapon(number.checked_sub(1)?)
        }
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_command("up\n"), Some(Command::Move(Direction::Up)));
        assert_eq!(parse_command("\x1b[B"), Some(Command::Move(Direction::Down)));
        assert_eq!(parse_command("h"), Some(Command::Move(Direction::Left)));
        assert_eq!(parse_command(" RIGHT "), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse_command("a"), Some(Command::Attack));
        assert_eq!(parse_command("s"), Some(Command::SwitchWeapon));
        assert_eq!(parse_command("r"), Some(Command::Reset));
        assert_eq!(parse_command("dump"), Some(Command::Dump));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_weapon_numbers() {
        assert_eq!(parse_command("1"), Some(Command::ChooseWeapon(0)));
        assert_eq!(parse_command("3"), Some(Command::ChooseWeapon(2)));
        assert_eq!(parse_command("0"), None);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("fly"), None);
        assert_eq!(parse_command("-1"), None);
    }
}
