use super::boards::rank;
use super::record::Record;
use super::tally::Tally;
use crate::N_BOARD;
use crate::N_BOARDS;
use crate::SweepError;
use rayon::prelude::*;
use std::path::Path;

/// Dense, pre-sized store of every showdown in a sweep.
///
/// Catalog entry `h` owns slots `[h * N_BOARDS, (h + 1) * N_BOARDS)`, in
/// board enumeration order. Every slot starts [`Record::UNSET`]; the
/// buffer is only trusted once [`Buffer::verify`] finds none left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    hands: usize,
    records: Vec<Record>,
}

impl Buffer {
    pub fn new(hands: usize) -> Self {
        Self {
            hands,
            records: vec![Record::UNSET; hands * N_BOARDS],
        }
    }
    pub fn hands(&self) -> usize {
        self.hands
    }
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Bounds-checked write at a global offset.
    pub fn write(&mut self, offset: usize, record: Record) -> Result<(), SweepError> {
        let capacity = self.capacity();
        let slot = self
            .records
            .get_mut(offset)
            .ok_or(SweepError::Capacity { offset, capacity })?;
        *slot = record;
        Ok(())
    }

    /// Disjoint per-entry slices for concurrent writers.
    pub fn units(&mut self) -> rayon::slice::ChunksMut<'_, Record> {
        self.records.par_chunks_mut(N_BOARDS)
    }

    pub fn slice(&self, hand: usize) -> Option<&[Record]> {
        self.records.chunks(N_BOARDS).nth(hand)
    }

    /// Record for the board dealt from these residual deck positions.
    pub fn get(&self, hand: usize, positions: &[usize; N_BOARD]) -> Option<&Record> {
        self.slice(hand).and_then(|s| s.get(rank(positions)))
    }

    /// Recount one entry from its stored records.
    pub fn tally(&self, hand: usize) -> Tally {
        self.slice(hand)
            .unwrap_or_default()
            .iter()
            .filter_map(Record::outcome)
            .collect()
    }

    /// Every slot has been written.
    pub fn verify(&self) -> Result<(), SweepError> {
        match self.records.par_iter().position_first(|r| !r.is_set()) {
            Some(offset) => Err(SweepError::Uncovered { offset }),
            None => Ok(()),
        }
    }

    /// file signature
    pub fn header() -> &'static [u8] {
        b"SWEEP\n\0"
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SweepError> {
        use byteorder::BE;
        use byteorder::WriteBytesExt;
        use std::fs::File;
        use std::io::BufWriter;
        use std::io::Write;
        let path = path.as_ref();
        let io = |source: std::io::Error| SweepError::Io {
            path: path.to_path_buf(),
            source,
        };
        log::info!("{:<32}{:<32}", "saving      buffer", path.display());
        let ref mut file = BufWriter::new(File::create(path).map_err(io)?);
        file.write_all(Self::header()).map_err(io)?;
        file.write_u32::<BE>(self.hands as u32).map_err(io)?;
        file.write_u32::<BE>(N_BOARDS as u32).map_err(io)?;
        for record in self.records.iter().copied() {
            file.write_all(&<[u8; Record::SIZE]>::from(record))
                .map_err(io)?;
        }
        file.flush().map_err(io)
    }

    /// Read a saved buffer back, rejecting any file whose length or records
    /// do not match its header. Unwritten slots survive the round trip, so a
    /// loaded buffer is not verified; call [`Buffer::verify`] before trusting it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SweepError> {
        use byteorder::BE;
        use byteorder::ReadBytesExt;
        use std::fs::File;
        use std::io::BufReader;
        use std::io::Read;
        let path = path.as_ref();
        let io = |source: std::io::Error| SweepError::Io {
            path: path.to_path_buf(),
            source,
        };
        log::info!("{:<32}{:<32}", "loading     buffer", path.display());
        let ref mut file = BufReader::new(File::open(path).map_err(io)?);
        let ref mut header = vec![0u8; Self::header().len()];
        file.read_exact(header).map_err(io)?;
        if header.as_slice() != Self::header() {
            return Err(SweepError::Format("bad signature".to_string()));
        }
        let hands = file.read_u32::<BE>().map_err(io)? as usize;
        let boards = file.read_u32::<BE>().map_err(io)? as usize;
        if boards != N_BOARDS {
            return Err(SweepError::Format(format!(
                "{} boards per hand, expected {}",
                boards, N_BOARDS
            )));
        }
        let expected = hands
            .checked_mul(N_BOARDS * Record::SIZE)
            .and_then(|n| n.checked_add(Self::header().len() + 8))
            .ok_or_else(|| SweepError::Format(format!("{} hands overflows the buffer size", hands)))?;
        let actual = std::fs::metadata(path).map_err(io)?.len();
        if actual != expected as u64 {
            return Err(SweepError::Format(format!(
                "{} bytes on disk, header implies {}",
                actual, expected
            )));
        }
        let mut records = Vec::with_capacity(hands * N_BOARDS);
        let ref mut bytes = [0u8; Record::SIZE];
        for _ in 0..hands * N_BOARDS {
            file.read_exact(bytes).map_err(io)?;
            records.push(Record::try_from(*bytes).map_err(SweepError::Format)?);
        }
        Ok(Self { hands, records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::showdown::Outcome;

    fn record(outcome: Outcome) -> Record {
        Record::from((Board::try_from("2c 3c 4c 5c 6c").unwrap(), outcome))
    }

    #[test]
    fn sized_from_catalog() {
        let buffer = Buffer::new(2);
        assert_eq!(buffer.capacity(), 2 * N_BOARDS);
        assert_eq!(buffer.slice(1).map(<[Record]>::len), Some(N_BOARDS));
        assert_eq!(buffer.slice(2), None);
    }

    #[test]
    fn overflow_is_rejected() {
        let mut buffer = Buffer::new(1);
        assert!(buffer.write(N_BOARDS - 1, record(Outcome::Win)).is_ok());
        let err = buffer.write(N_BOARDS, record(Outcome::Win)).unwrap_err();
        assert!(matches!(
            err,
            SweepError::Capacity { offset, capacity } if offset == N_BOARDS && capacity == N_BOARDS
        ));
    }

    #[test]
    fn verify_finds_first_gap() {
        let mut buffer = Buffer::new(1);
        for offset in 0..N_BOARDS {
            if offset != 12345 {
                buffer.write(offset, record(Outcome::Tie)).unwrap();
            }
        }
        assert!(matches!(buffer.verify(), Err(SweepError::Uncovered { offset: 12345 })));
        buffer.write(12345, record(Outcome::Lose)).unwrap();
        assert!(buffer.verify().is_ok());
        let tally = buffer.tally(0);
        assert_eq!(tally.losses(), 1);
        assert_eq!(tally.ties() as usize, N_BOARDS - 1);
        assert_eq!(buffer.get(0, &[0, 1, 2, 3, 4]), Some(&record(Outcome::Tie)));
    }

    #[test]
    fn save_then_load() {
        let mut buffer = Buffer::new(1);
        buffer.write(7, record(Outcome::Win)).unwrap();
        let path = std::env::temp_dir().join(format!("sweep-{}.bin", std::process::id()));
        buffer.save(&path).unwrap();
        let size = std::fs::metadata(&path).unwrap().len() as usize;
        assert_eq!(size, Buffer::header().len() + 8 + N_BOARDS * Record::SIZE);
        let loaded = Buffer::load(&path).unwrap();
        assert_eq!(loaded, buffer);
        assert!(matches!(loaded.verify(), Err(SweepError::Uncovered { offset: 0 })));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_files_are_rejected() {
        use std::io::Seek;
        use std::io::SeekFrom;
        use std::io::Write;
        let mut buffer = Buffer::new(1);
        buffer.write(0, record(Outcome::Win)).unwrap();
        let path = std::env::temp_dir().join(format!("sweep-corrupt-{}.bin", std::process::id()));
        let start = Buffer::header().len() as u64 + 8;

        buffer.save(&path).unwrap();
        let mut file = std::fs::OpenOptions::new().write(true).open(&path).unwrap();
        file.seek(SeekFrom::Start(start)).unwrap();
        file.write_all(&[200, 201, 202, 203, 204, 1]).unwrap();
        drop(file);
        assert!(matches!(Buffer::load(&path), Err(SweepError::Format(_))));

        buffer.save(&path).unwrap();
        let mut file = std::fs::OpenOptions::new().write(true).open(&path).unwrap();
        file.seek(SeekFrom::Start(Buffer::header().len() as u64)).unwrap();
        file.write_all(&u32::MAX.to_be_bytes()).unwrap();
        drop(file);
        assert!(matches!(Buffer::load(&path), Err(SweepError::Format(_))));

        buffer.save(&path).unwrap();
        let file = std::fs::OpenOptions::new().write(true).open(&path).unwrap();
        file.set_len(start + 60).unwrap();
        drop(file);
        assert!(matches!(Buffer::load(&path), Err(SweepError::Format(_))));

        std::fs::remove_file(&path).unwrap();
    }
}
