use std::io;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};

use anyhow::{bail, Result};
use machine::{Computer, State};

use crate::log;

/// Drive a computer against stdin/stdout, exchanging decimal numbers: one
/// output per line, and a line of comma-separated values per read.
pub fn numeric(intcode: Vec<i64>, feed: Vec<i64>) -> Result<()> {
    let mut c = Computer::new(intcode);
    c.feed(feed);
    let mut r = BufReader::new(io::stdin());
    let mut w = BufWriter::new(io::stdout());
    loop {
        match c.next()? {
            State::Yielded(value) => {
                writeln!(w, "{}", value)?;
            }
            State::Waiting => {
                w.flush()?;
                let values = machine::parse_program(&read_line(&mut r)?)?;
                log::trace!("queued {} input values", values.len());
                c.feed(values);
            }
            State::Complete => {
                break Ok(w.flush()?);
            }
        }
    }
}

/// Drive a computer against stdin/stdout, exchanging ASCII text. Outputs
/// outside the byte range are printed as decimal numbers, the way the
/// later puzzles report scores alongside their ASCII maps.
pub fn ascii(intcode: Vec<i64>, feed: Vec<i64>) -> Result<()> {
    let mut c = Computer::new(intcode);
    c.feed(feed);
    let mut r = BufReader::new(io::stdin());
    let mut w = BufWriter::new(io::stdout());
    loop {
        match c.next()? {
            State::Yielded(value) => match u8::try_from(value) {
                Ok(byte) => w.write_all(&[byte])?,
                Err(_) => writeln!(w, "{}", value)?,
            },
            State::Waiting => {
                w.flush()?;
                let line = read_line(&mut r)?;
                c.feed(line.bytes().map(i64::from));
            }
            State::Complete => {
                break Ok(w.flush()?);
            }
        }
    }
}

fn read_line(r: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if r.read_line(&mut line)? == 0 {
        bail!("end of input but the program wants more");
    }
    Ok(line)
}
