//! A fake board: display lines and a busy-wait clock sharing one timeline.

use std::cell::{Ref, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use segment_countdown::multiplex::{Multiplexer, DIGIT_COUNT, SEGMENT_COUNT};
use segment_countdown::Panel;

#[derive(Default)]
pub struct Board {
    pub digits: [bool; DIGIT_COUNT],
    pub segments: u8,
    pub now_ns: u64,
    pub lit_ns: [u64; DIGIT_COUNT],
    /// Every hold spent with a digit enabled: (digit, segments shown).
    pub frames: Vec<(usize, u8)>,
    pub writes: usize,
}

#[derive(Clone, Copy)]
enum Kind {
    Digit(usize),
    Segment(usize),
}

pub struct Line {
    board: Rc<RefCell<Board>>,
    kind: Kind,
}

impl Line {
    fn drive(&mut self, high: bool) {
        let mut board = self.board.borrow_mut();
        board.writes += 1;
        match self.kind {
            Kind::Digit(index) => board.digits[index] = high,
            Kind::Segment(bit) if high => board.segments |= 1 << bit,
            Kind::Segment(bit) => board.segments &= !(1 << bit),
        }
    }
}

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

pub struct Clock(Rc<RefCell<Board>>);

impl DelayNs for Clock {
    fn delay_ns(&mut self, ns: u32) {
        let mut board = self.0.borrow_mut();
        let ns = u64::from(ns);
        board.now_ns += ns;
        let lit: Vec<usize> = (0..DIGIT_COUNT).filter(|&i| board.digits[i]).collect();
        for index in lit {
            board.lit_ns[index] += ns;
            let segments = board.segments;
            board.frames.push((index, segments));
        }
    }
}

pub struct Bench(Rc<RefCell<Board>>);

impl Bench {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Board::default())))
    }

    pub fn panel(&self) -> Panel<Line, Clock> {
        let line = |kind| Line {
            board: Rc::clone(&self.0),
            kind,
        };
        let digits = core::array::from_fn(|i| line(Kind::Digit(i)));
        let segments: [Line; SEGMENT_COUNT] = core::array::from_fn(|bit| line(Kind::Segment(bit)));
        Panel::new(Multiplexer::new(digits, segments), Clock(Rc::clone(&self.0)))
    }

    pub fn board(&self) -> Ref<'_, Board> {
        self.0.borrow()
    }

    pub fn lit_digits(&self) -> usize {
        self.board().digits.iter().filter(|&&on| on).count()
    }
}
