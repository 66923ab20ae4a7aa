//! Length-prefixed bincode framing over a TCP stream.
//!
//! Every frame is a big-endian `u32` payload length followed by the bincode
//! encoding of one [`Message`]. Frames are small except [`Message::Graph`]
//! and [`Message::Partial`], which scale with the input.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use betwixt_common::Result;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::protocol::Message;

/// A framed, blocking message channel over one TCP connection.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Connects to a coordinator at `addr`.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        Self::from_stream(TcpStream::connect(addr)?)
    }

    /// Wraps an accepted stream.
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        stream.set_nodelay(true)?;
        Ok(Self { stream })
    }

    /// Sends one message, blocking until it is fully written.
    pub fn send(&mut self, message: &Message) -> Result<()> {
        let payload = bincode::serde::encode_to_vec(message, bincode::config::standard())?;
        self.stream.write_u32::<BigEndian>(payload.len() as u32)?;
        self.stream.write_all(&payload)?;
        self.stream.flush()?;
        Ok(())
    }

    /// Receives one message, blocking until a full frame arrives.
    pub fn recv(&mut self) -> Result<Message> {
        let len = self.stream.read_u32::<BigEndian>()? as usize;
        let mut payload = vec![0_u8; len];
        self.stream.read_exact(&mut payload)?;
        let (message, _) =
            bincode::serde::decode_from_slice(&payload, bincode::config::standard())?;
        Ok(message)
    }
}
