//! Socket notation
//!
//! The `Sockets:` property uses one letter per socket, `-` between linked
//! sockets and a space between independent groups: `R-G-B B` is a three-link
//! plus a lone blue socket.

use serde::Serialize;

/// Socket colour letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocketColor {
    Red,
    Green,
    Blue,
    White,
    Abyss,
}

impl SocketColor {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'R' => Some(SocketColor::Red),
            'G' => Some(SocketColor::Green),
            'B' => Some(SocketColor::Blue),
            'W' => Some(SocketColor::White),
            'A' => Some(SocketColor::Abyss),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            SocketColor::Red => 'R',
            SocketColor::Green => 'G',
            SocketColor::Blue => 'B',
            SocketColor::White => 'W',
            SocketColor::Abyss => 'A',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Socket {
    pub color: SocketColor,
}

/// Sockets linked together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocketGroup {
    pub sockets: Vec<Socket>,
}

impl SocketGroup {
    /// Number of linked sockets. A lone socket has no link and counts 0.
    pub fn links(&self) -> usize {
        match self.sockets.len() {
            1 => 0,
            n => n,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemSockets {
    pub groups: Vec<SocketGroup>,
}

impl ItemSockets {
    /// Parse socket notation such as `R-G-B B`.
    ///
    /// Unknown colour letters are skipped; a group left with no sockets is
    /// dropped.
    pub fn parse(notation: &str) -> Self {
        let groups = notation
            .split_whitespace()
            .map(|group| SocketGroup {
                sockets: group
                    .split('-')
                    .filter_map(|code| code.trim().chars().next())
                    .filter_map(SocketColor::from_code)
                    .map(|color| Socket { color })
                    .collect(),
            })
            .filter(|group| !group.sockets.is_empty())
            .collect();

        Self { groups }
    }

    /// Sum of links over all groups.
    ///
    /// Lone sockets contribute 0, so `R-G B` counts 2, not 3.
    pub fn count(&self) -> usize {
        self.groups.iter().map(SocketGroup::links).sum()
    }

    /// Links of the largest group
    pub fn max_links(&self) -> usize {
        self.groups.iter().map(SocketGroup::links).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl std::fmt::Display for ItemSockets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups: Vec<String> = self
            .groups
            .iter()
            .map(|group| {
                group
                    .sockets
                    .iter()
                    .map(|s| s.color.code().to_string())
                    .collect::<Vec<_>>()
                    .join("-")
            })
            .collect();
        f.write_str(&groups.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linked_pair_and_lone_socket() {
        let sockets = ItemSockets::parse("R-G B");
        assert_eq!(sockets.groups.len(), 2);
        assert_eq!(sockets.groups[0].links(), 2);
        assert_eq!(sockets.groups[1].links(), 0);
        assert_eq!(sockets.count(), 2);
    }

    #[test]
    fn test_colours_in_order() {
        let sockets = ItemSockets::parse("B-W-A-R");
        let colours: Vec<_> = sockets.groups[0].sockets.iter().map(|s| s.color).collect();
        assert_eq!(
            colours,
            vec![
                SocketColor::Blue,
                SocketColor::White,
                SocketColor::Abyss,
                SocketColor::Red
            ]
        );
        assert_eq!(sockets.max_links(), 4);
    }

    #[test]
    fn test_six_link() {
        let sockets = ItemSockets::parse("R-R-G-G-B-B");
        assert_eq!(sockets.count(), 6);
        assert_eq!(sockets.to_string(), "R-R-G-G-B-B");
    }

    #[test]
    fn test_unknown_letters_and_empty() {
        let sockets = ItemSockets::parse("R-X G X");
        assert_eq!(sockets.groups.len(), 2);
        assert_eq!(sockets.groups[0].sockets.len(), 1);
        assert!(ItemSockets::parse("").is_empty());
    }
}
