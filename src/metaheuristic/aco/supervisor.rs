use crate::metaheuristic::aco::message::Record;
use crate::metaheuristic::aco::Message;
use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::{Message as _, MessageInfo};

use csv::Writer;
use std::io::{sink, Sink, Write};
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

/// Collects the messages of ants and colony and writes one csv row per
/// `aggregation_rate` iterations.
pub struct Supervisor<W: Write> {
    pub sender: Sender<Message>,
    receiver: Receiver<Message>,
    messages: Vec<MessageInfo>,
    written: usize,
    aggregation_rate: usize,
    writer: Writer<W>,
}

impl<W: Write> Supervisor<W> {
    pub fn new(aggregation_rate: usize, writer: Writer<W>) -> Self {
        let (tx, rx) = mpsc::channel();
        Supervisor {
            sender: tx,
            receiver: rx,
            messages: Vec::default(),
            written: 0,
            aggregation_rate: aggregation_rate.max(1),
            writer,
        }
    }

    pub fn sender(&self) -> Sender<Message> {
        self.sender.clone()
    }

    /// Aggregated statistics received so far, one entry per window.
    pub fn messages(&self) -> &[MessageInfo] {
        &self.messages
    }

    pub fn into_writer(self) -> Writer<W> {
        self.writer
    }

    fn receive(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            let idx = message.iteration / self.aggregation_rate;
            if idx >= self.messages.len() {
                self.messages.resize_with(idx + 1, Default::default);
            }
            self.messages[idx] += message.get_info();
        }
    }

    fn write_pending(&mut self) {
        for i in self.written..self.messages.len() {
            let record = Record::from_info(i * self.aggregation_rate, &self.messages[i]);
            if let Err(err) = self.writer.serialize(record) {
                eprintln!("{:?}", err);
            }
        }
        self.written = self.messages.len();

        if let Err(err) = self.writer.flush() {
            eprintln!("{:?}", err);
        }
    }
}

impl<W: Write> supervisor::Supervisor<Message> for Supervisor<W> {
    fn aggregate_receive(&mut self) {
        self.receive();
        self.write_pending();
    }
}

impl Default for Supervisor<Sink> {
    fn default() -> Self {
        Supervisor::new(1, Writer::from_writer(sink()))
    }
}
