/// Frequency table of rolled faces.
///
/// `buckets[f]` is the number of dice that rolled face `f`. Bucket 0 exists
/// so faces index directly and is never incremented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: Vec<u32>,
}

impl Histogram {
    pub fn new(sides: u32) -> Self {
        Histogram {
            buckets: vec![0; sides as usize + 1],
        }
    }

    /// Build a histogram from already rolled faces.
    ///
    /// # Panics
    /// Panics if a face is 0 or greater than `sides`.
    pub fn from_faces<I>(sides: u32, faces: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut histogram = Histogram::new(sides);
        for face in faces {
            histogram.record(face);
        }
        histogram
    }

    /// # Panics
    /// Panics if `face` is 0 or greater than the number of sides.
    pub fn record(&mut self, face: u32) {
        assert!(
            face >= 1 && face <= self.sides(),
            "face {face} outside 1..={}",
            self.sides()
        );
        self.buckets[face as usize] += 1;
    }

    pub fn sides(&self) -> u32 {
        (self.buckets.len() - 1) as u32
    }

    /// Number of dice that rolled `face`, 0 for faces outside the die.
    pub fn get(&self, face: u32) -> u32 {
        self.buckets.get(face as usize).copied().unwrap_or(0)
    }

    /// Number of dice recorded, the sum of every bucket.
    pub fn count(&self) -> u64 {
        self.buckets.iter().map(|&n| u64::from(n)).sum()
    }

    pub fn total(&self) -> u64 {
        self.rolled().map(|(face, n)| u64::from(face) * u64::from(n)).sum()
    }

    /// `(face, frequency)` for every face rolled at least once, ascending.
    pub fn rolled(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, n)| **n > 0)
            .map(|(face, n)| (face as u32, *n))
    }

    /// Expand into the non-decreasing list of every rolled face.
    pub fn ordered(&self) -> Vec<u32> {
        let mut list = Vec::with_capacity(self.count() as usize);
        for (face, n) in self.rolled() {
            list.extend(std::iter::repeat_n(face, n as usize));
        }
        list
    }

    /// Faces that took the lead while scanning `1..=sides`, with the
    /// frequency they led with. The last entry is the first face reaching
    /// the highest frequency.
    pub fn leader_changes(&self) -> Vec<(u32, u32)> {
        let mut top = 0;
        let mut changes = Vec::new();
        for (face, n) in self.rolled() {
            if n > top {
                top = n;
                changes.push((face, n));
            }
        }
        changes
    }

    /// Highest frequency and every face reaching it, ascending.
    pub fn most_common(&self) -> (u32, Vec<u32>) {
        let top = self.rolled().map(|(_, n)| n).max().unwrap_or(0);
        if top == 0 {
            return (0, Vec::new());
        }
        let faces = self
            .rolled()
            .filter(|(_, n)| *n == top)
            .map(|(face, _)| face)
            .collect();
        (top, faces)
    }
}
