//! Recording bus shared by the unit tests

use std::collections::VecDeque;
use std::vec::Vec;

use crate::config::PanelConfig;
use crate::interface::BusIo;
use crate::st7735::St7735;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Init,
    DeInit,
    WriteRegister(u8, Vec<u8>),
    SendData(Vec<u8>),
    ReceiveData(usize),
    Delay(u32),
}

#[derive(Debug, PartialEq, Eq)]
pub struct BusFault;

#[derive(Default)]
pub struct RecordingBus {
    pub log: Vec<Transaction>,
    /// Bytes handed out by `receive_data`, front first
    pub readback: VecDeque<u8>,
    /// Fail the transaction with this zero-based index
    pub fail_at: Option<usize>,
    pub ticks: Option<u32>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(n: usize) -> Self {
        Self { fail_at: Some(n), ..Self::default() }
    }

    fn record(&mut self, t: Transaction) -> Result<(), BusFault> {
        let index = self.log.len();
        self.log.push(t);
        if self.fail_at == Some(index) {
            return Err(BusFault);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }

    pub fn register_writes(&self, reg: u8) -> usize {
        self.log
            .iter()
            .filter(|t| matches!(t, Transaction::WriteRegister(r, _) if *r == reg))
            .count()
    }

    pub fn sends(&self) -> Vec<Vec<u8>> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::SendData(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }
}

impl BusIo for RecordingBus {
    type Error = BusFault;

    fn write_register(&mut self, reg: u8, data: &[u8]) -> Result<(), BusFault> {
        self.record(Transaction::WriteRegister(reg, data.to_vec()))
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), BusFault> {
        self.record(Transaction::SendData(data.to_vec()))
    }

    fn receive_data(&mut self, buf: &mut [u8]) -> Result<(), BusFault> {
        self.record(Transaction::ReceiveData(buf.len()))?;
        for b in buf.iter_mut() {
            *b = self.readback.pop_front().unwrap_or(0);
        }
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Transaction::Delay(ms));
    }

    fn init(&mut self) -> Result<(), BusFault> {
        self.record(Transaction::Init)
    }

    fn deinit(&mut self) -> Result<(), BusFault> {
        self.record(Transaction::DeInit)
    }

    fn tick(&mut self) -> Option<u32> {
        let now = self.ticks?;
        self.ticks = Some(now + 1);
        Some(now)
    }
}

/// A registered 128x160 driver in portrait, with the registration traffic cleared
pub fn portrait_driver() -> St7735<RecordingBus> {
    let mut lcd = St7735::register(RecordingBus::new(), PanelConfig::default()).unwrap();
    lcd.bus_mut().clear();
    lcd
}
