//! Print what the detector sees in a few candidates and what the rule table
//! licenses for each.

use tola_container::caps::Capability;
use tola_container::prelude::*;
use tola_container::rules::{DerivedOp, Profile};
use tola_container::{capabilities, classify, profile};

// =============================================================================
// Countdown: forward, sentinel-terminated, no primitives at all
// =============================================================================

#[derive(Container)]
struct Countdown {
    values: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tick(usize);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Liftoff;

impl PartialEq<Liftoff> for Tick {
    fn eq(&self, _: &Liftoff) -> bool {
        self.0 == 0
    }
}

impl Cursor<Countdown> for Tick {
    type Category = ForwardTag;

    fn advance(&mut self, _: &Countdown) {
        self.0 -= 1;
    }

    fn get<'a>(&self, seq: &'a Countdown) -> &'a u32 {
        &seq.values[self.0 - 1]
    }
}

impl CursorMut<Countdown> for Tick {
    fn get_mut<'a>(&self, seq: &'a mut Countdown) -> &'a mut u32 {
        &mut seq.values[self.0 - 1]
    }
}

impl Sequence for Countdown {
    type Item = u32;
    type Cursor = Tick;
    type Sentinel = Liftoff;
    type ConstCursor = Tick;
    type ConstSentinel = Liftoff;

    fn begin(&self) -> Tick {
        Tick(self.values.len())
    }

    fn end(&self) -> Liftoff {
        Liftoff
    }
}

tola_container::register!(Countdown);

// =============================================================================
// Buffer: contiguous, append-only
// =============================================================================

#[derive(Container)]
#[container(register)]
struct Buffer {
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Offset(usize);

impl Cursor<Buffer> for Offset {
    type Category = ContiguousTag;

    fn advance(&mut self, _: &Buffer) {
        self.0 += 1;
    }

    fn get<'a>(&self, seq: &'a Buffer) -> &'a u8 {
        &seq.bytes[self.0]
    }
}

impl CursorMut<Buffer> for Offset {
    fn get_mut<'a>(&self, seq: &'a mut Buffer) -> &'a mut u8 {
        &mut seq.bytes[self.0]
    }
}

impl BidirectionalCursor<Buffer> for Offset {
    fn retreat(&mut self, _: &Buffer) {
        self.0 -= 1;
    }
}

impl RandomAccessCursor<Buffer> for Offset {
    fn offset(&mut self, n: isize) {
        self.0 = self.0.wrapping_add_signed(n);
    }

    fn distance(&self, from: &Self) -> isize {
        self.0 as isize - from.0 as isize
    }
}

impl ContiguousCursor<Buffer> for Offset {
    fn as_slice<'a>(&self, end: &Self, seq: &'a Buffer) -> &'a [u8] {
        &seq.bytes[self.0..end.0]
    }

    fn as_mut_slice<'a>(&self, end: &Self, seq: &'a mut Buffer) -> &'a mut [u8] {
        &mut seq.bytes[self.0..end.0]
    }
}

impl Sequence for Buffer {
    type Item = u8;
    type Cursor = Offset;
    type Sentinel = Offset;
    type ConstCursor = Offset;
    type ConstSentinel = Offset;

    fn begin(&self) -> Offset {
        Offset(0)
    }

    fn end(&self) -> Offset {
        Offset(self.bytes.len())
    }
}

impl EmplaceBack for Buffer {
    fn emplace_back(&mut self, value: u8) {
        self.bytes.push(value);
    }
}

// =============================================================================
// Report
// =============================================================================

fn report(name: &str, profile: &Profile) {
    println!("== {name} ==");
    println!("{profile}");
    let missing: Vec<_> = Capability::ALL
        .iter()
        .filter(|cap| !profile.capabilities.contains(cap.as_set()))
        .map(|cap| cap.trait_name())
        .collect();
    println!("missing primitives: {}", missing.join(", "));
    let withheld: Vec<_> = DerivedOp::ALL.iter().filter(|op| !profile.offers(**op)).collect();
    println!("withheld: {withheld:?}\n");
}

fn main() {
    println!("--- Capability Report ---\n");

    report("Countdown", &<Countdown as Registered>::PROFILE);
    report("Buffer", &<Buffer as Registered>::PROFILE);

    // The same facts, read piecemeal.
    const BUFFER_CAPS: tola_container::CapabilitySet = capabilities!(Buffer);
    assert_eq!(BUFFER_CAPS.capabilities().count(), 1);
    assert_eq!(classify!(Buffer, Offset), tola_container::Category::Contiguous);
    assert_eq!(profile!(Countdown), <Countdown as Registered>::PROFILE);

    let countdown = Countdown { values: vec![1, 2, 3] };
    println!("countdown: {:?} (len {})", countdown.iter().collect::<Vec<_>>(), countdown.len());

    let mut buffer = Buffer { bytes: Vec::new() };
    buffer.push_back(b'o');
    buffer.push_back(b'k');
    buffer.as_mut_slice().make_ascii_uppercase();
    println!("buffer:    {:?}", std::str::from_utf8(buffer.as_slice()));
    assert!(caps_check!(Buffer: EmplaceBack & !EmplaceFront));
    assert!(offers!(Buffer: push_back & back & data & !pop_back));
}
