//! Per-object offset records and cross-reference emission.

/// One slot of the offset table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot {
    /// Byte position of the `N G obj` header; `None` until written.
    pub offset: Option<u64>,
    /// Generation number (65535 for slot 0).
    pub generation: u16,
    /// True between reservation and the fulfilling write.
    pub reserved: bool,
}

/// Ordered offset records, one per object number.
///
/// Slot 0 is the free-list head and always present. Object numbers are
/// allocated densely from 1 upward by a single counter shared between
/// immediate and reserved writes, so the table never has gaps.
#[derive(Debug)]
pub(crate) struct XrefTable {
    slots: Vec<Slot>,
}

impl XrefTable {
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                offset: None,
                generation: 65535,
                reserved: false,
            }],
        }
    }

    /// Allocates the next object number.
    pub fn allocate(&mut self, generation: u16, reserved: bool) -> u32 {
        let number = self.slots.len() as u32;
        self.slots.push(Slot {
            offset: None,
            generation,
            reserved,
        });
        number
    }

    /// Returns the slot count, slot 0 included. This is the `Size` of
    /// the trailer and the row count of the xref section.
    pub fn len(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Returns true if the given reference names a live reservation.
    pub fn is_reserved(&self, number: u32, generation: u16) -> bool {
        match self.slots.get(number as usize) {
            Some(slot) => slot.reserved && slot.generation == generation,
            None => false,
        }
    }

    /// Records the definitive offset for a slot and clears its
    /// reservation. Offsets transition from sentinel at most once.
    pub fn record(&mut self, number: u32, offset: u64) {
        if let Some(slot) = self.slots.get_mut(number as usize) {
            slot.offset = Some(offset);
            slot.reserved = false;
        }
    }

    /// Returns the lowest object number that is still reserved.
    pub fn first_reserved(&self) -> Option<u32> {
        self.slots
            .iter()
            .position(|slot| slot.reserved)
            .map(|index| index as u32)
    }

    /// Emits the cross-reference section: the `xref` keyword, the single
    /// subsection header, and one fixed-width 20-byte row per slot.
    pub fn write_table(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"xref\r\n");
        out.extend_from_slice(format!("0 {}\r\n", self.slots.len()).as_bytes());
        for (number, slot) in self.slots.iter().enumerate() {
            let kind = if number == 0 || slot.offset.is_none() {
                'f'
            } else {
                'n'
            };
            out.extend_from_slice(
                format!(
                    "{:010} {:05} {}\r\n",
                    slot.offset.unwrap_or(0),
                    slot.generation,
                    kind
                )
                .as_bytes(),
            );
        }
    }
}
