//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from
//! specific memory implementations, plus the three implementations the crate
//! ships with:
//!
//! - `FlatMemory` - plain 64KB RAM
//! - `SerialMemory` - 64KB RAM with two memory-mapped serial FIFO ports
//! - `TracedMemory` - observer wrapper recording every bus access
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - The address space is exactly 64K; all address arithmetic wraps
//! - Reads may have I/O side effects (a receive port pops its FIFO), so a
//!   separate `peek` exists for side-effect-free inspection

use std::cell::RefCell;
use std::collections::VecDeque;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, mapped I/O) through this abstraction.
///
/// # Design
///
/// - `read(&self)`: may carry I/O side effects; implementations with
///   read-sensitive ports use interior mutability
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - `peek(&self)`: must never have side effects; decode-length and
///   disassembly queries go through this path only
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use lib65c02::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Reads of intercepted I/O addresses may
    /// mutate device state (e.g. pop a receive FIFO).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Writes to intercepted I/O addresses may
    /// be redirected to device state instead of RAM.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a byte without triggering any I/O side effect.
    ///
    /// The default forwards to `read`, which is correct for plain RAM.
    /// Implementations with read-sensitive addresses must override this to
    /// bypass interception.
    fn peek(&self, addr: u16) -> u8 {
        self.read(addr)
    }

    /// Reads a little-endian word from `addr` and `addr + 1`.
    ///
    /// The second address wraps modulo 65536, so a word read at 0xFFFF picks
    /// its high byte up from 0x0000. Each byte read is independently subject
    /// to I/O interception.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Little-endian word variant of `peek`.
    fn peek_word(&self, addr: u16) -> u16 {
        let lo = self.peek(addr) as u16;
        let hi = self.peek(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are plain read/write RAM initialized to 0x00. Useful
/// for tests and for programs that don't need I/O.
///
/// # Examples
///
/// ```
/// use lib65c02::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte
/// assert_eq!(memory.read_word(0xFFFC), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`, wrapping at the end of
    /// the address space.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65c02::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x8000, &[0xA9, 0x42]); // LDA #$42
    /// assert_eq!(mem.read(0x8001), 0x42);
    /// ```
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut cursor = addr;
        for &byte in bytes {
            self.data[cursor as usize] = byte;
            cursor = cursor.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u8; 65536]> for FlatMemory {
    /// Builds a memory from a complete 64K image.
    fn from(image: [u8; 65536]) -> Self {
        Self {
            data: Box::new(image),
        }
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// Default transmit port address (CPU writes here to send a byte out).
pub const DEFAULT_TX_PORT: u16 = 0x0302;

/// Default receive port address (CPU reads here to take a byte in).
pub const DEFAULT_RX_PORT: u16 = 0x0303;

/// 64KB RAM with two intercepted serial port addresses.
///
/// A write to the transmit port enqueues the byte on an outbound FIFO instead
/// of storing it; a read from the receive port dequeues a byte from an
/// inbound FIFO instead of reading RAM. An empty receive read returns 0 and
/// never blocks. All other addresses behave exactly like `FlatMemory`.
///
/// The FIFOs are unbounded and owned by the bus. The host side of the link
/// uses `push_received` to feed the inbound queue and `pop_transmitted` to
/// drain the outbound one.
///
/// # Examples
///
/// ```
/// use lib65c02::{MemoryBus, SerialMemory};
///
/// let mut mem = SerialMemory::new();
///
/// // CPU-side write to the TX port lands in the outbound FIFO, not RAM
/// mem.write(0x0302, b'H');
/// assert_eq!(mem.pop_transmitted(), Some(b'H'));
/// assert_eq!(mem.peek(0x0302), 0x00);
///
/// // Host feeds a byte; a CPU-side read of the RX port pops it
/// mem.push_received(b'y');
/// assert_eq!(mem.read(0x0303), b'y');
/// assert_eq!(mem.read(0x0303), 0x00); // empty FIFO reads as 0
/// ```
pub struct SerialMemory {
    data: Box<[u8; 65536]>,
    tx_port: u16,
    rx_port: u16,
    outbound: VecDeque<u8>,
    // Popped during read(&self), hence the interior mutability
    inbound: RefCell<VecDeque<u8>>,
}

impl SerialMemory {
    /// Creates a serial memory with the default port addresses
    /// (`DEFAULT_TX_PORT` / `DEFAULT_RX_PORT`).
    pub fn new() -> Self {
        Self::with_ports(DEFAULT_TX_PORT, DEFAULT_RX_PORT)
    }

    /// Creates a serial memory with caller-chosen port addresses.
    ///
    /// The two addresses must differ; the port mapping is fixed for the
    /// lifetime of the bus.
    pub fn with_ports(tx_port: u16, rx_port: u16) -> Self {
        assert_ne!(tx_port, rx_port, "serial ports must use distinct addresses");
        Self {
            data: Box::new([0; 65536]),
            tx_port,
            rx_port,
            outbound: VecDeque::new(),
            inbound: RefCell::new(VecDeque::new()),
        }
    }

    /// Copies `bytes` into RAM starting at `addr`, wrapping at 0xFFFF.
    /// Port interception does not apply; this is a raw image load.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut cursor = addr;
        for &byte in bytes {
            self.data[cursor as usize] = byte;
            cursor = cursor.wrapping_add(1);
        }
    }

    /// Queues a byte for the CPU to pick up at the receive port.
    pub fn push_received(&mut self, byte: u8) {
        self.inbound.borrow_mut().push_back(byte);
    }

    /// Takes the oldest byte the CPU wrote to the transmit port, if any.
    pub fn pop_transmitted(&mut self) -> Option<u8> {
        self.outbound.pop_front()
    }

    /// Number of transmitted bytes waiting to be drained.
    pub fn transmitted_len(&self) -> usize {
        self.outbound.len()
    }
}

impl Default for SerialMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for SerialMemory {
    fn read(&self, addr: u16) -> u8 {
        if addr == self.rx_port {
            // Empty FIFO reads as 0 rather than blocking
            self.inbound.borrow_mut().pop_front().unwrap_or(0)
        } else {
            self.data[addr as usize]
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr == self.tx_port {
            self.outbound.push_back(value);
        } else {
            self.data[addr as usize] = value;
        }
    }

    fn peek(&self, addr: u16) -> u8 {
        // Bypasses both ports: inspection must not drain the inbound FIFO
        self.data[addr as usize]
    }
}

/// One recorded bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    /// Address the access touched.
    pub address: u16,
    /// Byte transferred (the value read, or the value written).
    pub value: u8,
    /// True for reads and peeks, false for writes.
    pub is_read: bool,
}

/// Observer wrapper that records every access to the inner bus.
///
/// Reads, peeks, and writes are forwarded unchanged to the wrapped bus and a
/// `TraceEvent` is appended per access. The wrapper never alters bus
/// semantics; it exists for conformance tests (e.g. proving that disassembly
/// performs no writes and touches only the declared operand bytes).
///
/// # Examples
///
/// ```
/// use lib65c02::{FlatMemory, MemoryBus, TracedMemory};
///
/// let mut mem = TracedMemory::new(FlatMemory::new());
/// mem.write(0x0010, 0xAB);
/// let events = mem.take_events();
/// assert_eq!(events.len(), 1);
/// assert!(!events[0].is_read);
/// assert_eq!(events[0].address, 0x0010);
/// ```
pub struct TracedMemory<M: MemoryBus> {
    inner: M,
    events: RefCell<Vec<TraceEvent>>,
}

impl<M: MemoryBus> TracedMemory<M> {
    /// Wraps `inner`, starting with an empty event log.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            events: RefCell::new(Vec::new()),
        }
    }

    /// Returns and clears the recorded events.
    pub fn take_events(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of events recorded since the last `take_events`.
    pub fn event_count(&self) -> usize {
        self.events.borrow().len()
    }

    /// Gives back the wrapped bus, discarding the log.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: MemoryBus> MemoryBus for TracedMemory<M> {
    fn read(&self, addr: u16) -> u8 {
        let value = self.inner.read(addr);
        self.events.borrow_mut().push(TraceEvent {
            address: addr,
            value,
            is_read: true,
        });
        value
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.events.borrow_mut().push(TraceEvent {
            address: addr,
            value,
            is_read: false,
        });
        self.inner.write(addr, value);
    }

    fn peek(&self, addr: u16) -> u8 {
        let value = self.inner.peek(addr);
        self.events.borrow_mut().push(TraceEvent {
            address: addr,
            value,
            is_read: true,
        });
        value
    }
}
