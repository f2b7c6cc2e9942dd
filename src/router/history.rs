//! In-Memory-Navigationshistorie mit Cursor.
//!
//! Modelliert eine Browser-artige Historie: `push` schneidet die
//! Vorwärts-Einträge ab, `back`/`forward` bewegen nur den Cursor.

/// Navigationshistorie als Stapel mit Cursor.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    stack: Vec<String>,
    /// Index des aktuellen Eintrags; nur bei leerem Stapel `None`
    cursor: Option<usize>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Eintrag, falls die Historie nicht leer ist.
    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|index| self.stack[index].as_str())
    }

    /// Anzahl der Einträge (inklusive abgeschnittener Zukunft: keine).
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Legt einen neuen Eintrag ab und macht ihn aktuell.
    ///
    /// Stand der Cursor nicht am Ende, verfallen alle Einträge
    /// dahinter — genau wie beim Navigieren nach einem `back` im
    /// Browser.
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if let Some(index) = self.cursor {
            self.stack.truncate(index + 1);
        }
        self.stack.push(path);
        self.cursor = Some(self.stack.len() - 1);
    }

    /// Geht einen Eintrag zurück. Gibt den neuen aktuellen Eintrag
    /// zurück, oder `None` am Anfang der Historie (No-op).
    pub fn back(&mut self) -> Option<&str> {
        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                self.current()
            }
            _ => None,
        }
    }

    /// Geht einen Eintrag vor. Gibt den neuen aktuellen Eintrag
    /// zurück, oder `None` am Ende der Historie (No-op).
    pub fn forward(&mut self) -> Option<&str> {
        match self.cursor {
            Some(index) if index + 1 < self.stack.len() => {
                self.cursor = Some(index + 1);
                self.current()
            }
            _ => None,
        }
    }
}
