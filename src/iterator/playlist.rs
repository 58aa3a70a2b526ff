// Playlist - ordered and shuffled traversal

use super::IteratorError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Playlist {
    songs: Vec<Song>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Songs in insertion order
    pub fn iter(&self) -> PlaylistIter<'_> {
        PlaylistIter {
            songs: &self.songs,
            order: (0..self.songs.len()).collect(),
            index: 0,
        }
    }

    /// Every song exactly once, in an order drawn from `rng`
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> PlaylistIter<'_> {
        let mut iter = self.iter();
        iter.order.shuffle(rng);
        iter
    }

    /// Cursor that can remove the song it last returned
    pub fn cursor(&mut self) -> PlaylistCursor<'_> {
        PlaylistCursor {
            songs: &mut self.songs,
            next_index: 0,
            can_remove: false,
            started: false,
        }
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = PlaylistIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a playlist following a fixed index order
pub struct PlaylistIter<'a> {
    songs: &'a [Song],
    order: Vec<usize>,
    index: usize,
}

impl<'a> Iterator for PlaylistIter<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let song_index = *self.order.get(self.index)?;
        self.index += 1;
        self.songs.get(song_index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlaylistIter<'_> {}

/// Mutating cursor with the classic `next`/`remove` contract
///
/// `remove` deletes the element most recently returned by `next_song`. Calling
/// it before `next_song`, or twice for one element, is a contract violation.
pub struct PlaylistCursor<'a> {
    songs: &'a mut Vec<Song>,
    next_index: usize,
    can_remove: bool,
    started: bool,
}

impl PlaylistCursor<'_> {
    pub fn has_next(&self) -> bool {
        self.next_index < self.songs.len()
    }

    pub fn next_song(&mut self) -> Option<&Song> {
        let song = self.songs.get(self.next_index)?;
        self.next_index += 1;
        self.can_remove = true;
        self.started = true;
        Some(song)
    }

    pub fn remove(&mut self) -> Result<Song, IteratorError> {
        if !self.started {
            return Err(IteratorError::RemoveBeforeNext);
        }
        if !self.can_remove {
            return Err(IteratorError::AlreadyRemoved);
        }
        self.can_remove = false;
        self.next_index -= 1;
        Ok(self.songs.remove(self.next_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playlist() -> Playlist {
        let mut playlist = Playlist::new();
        playlist.add_song(Song::new("Bohemian Rhapsody", "Queen"));
        playlist.add_song(Song::new("Imagine", "John Lennon"));
        playlist.add_song(Song::new("Billie Jean", "Michael Jackson"));
        playlist
    }

    #[test]
    fn test_ordered_iteration() {
        let playlist = playlist();
        let lines: Vec<String> = playlist.iter().map(|s| s.to_string()).collect();

        assert_eq!(
            lines,
            vec![
                "Bohemian Rhapsody by Queen",
                "Imagine by John Lennon",
                "Billie Jean by Michael Jackson",
            ]
        );
        assert_eq!(playlist.iter().len(), 3);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let playlist = playlist();
        let mut rng = StdRng::seed_from_u64(7);

        let mut shuffled: Vec<&str> = playlist
            .shuffled(&mut rng)
            .map(|s| s.title.as_str())
            .collect();
        shuffled.sort_unstable();

        let mut ordered: Vec<&str> = playlist.iter().map(|s| s.title.as_str()).collect();
        ordered.sort_unstable();

        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let playlist = playlist();
        let a: Vec<&Song> = playlist.shuffled(&mut StdRng::seed_from_u64(42)).collect();
        let b: Vec<&Song> = playlist.shuffled(&mut StdRng::seed_from_u64(42)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_remove_before_next_is_rejected() {
        let mut playlist = playlist();
        let mut cursor = playlist.cursor();

        assert_eq!(cursor.remove(), Err(IteratorError::RemoveBeforeNext));
    }

    #[test]
    fn test_cursor_remove() {
        let mut playlist = playlist();
        {
            let mut cursor = playlist.cursor();
            cursor.next_song();
            cursor.next_song();
            let removed = cursor.remove().unwrap();
            assert_eq!(removed.title, "Imagine");
            assert_eq!(cursor.remove(), Err(IteratorError::AlreadyRemoved));

            assert_eq!(
                cursor.next_song().map(|s| s.title.clone()),
                Some("Billie Jean".to_string())
            );
            assert!(!cursor.has_next());
        }
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn test_empty_playlist() {
        let mut playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.iter().next(), None);
        assert!(playlist.cursor().next_song().is_none());
    }
}
