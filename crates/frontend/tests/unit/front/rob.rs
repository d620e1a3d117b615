//! # ROB Queue Tests
//!
//! Tests for the bounded circular micro-op queue.

use oosim_frontend::front::rob::RobQueue;
use oosim_frontend::isa::uop::{MicroOp, UopKind};

fn nop_at(addr: u64) -> MicroOp {
    MicroOp {
        addr,
        hw_thr: 0,
        len: 4,
        kind: UopKind::IntAluImm { dst: 0, src: 0, imm: 0 },
    }
}

#[test]
fn test_new_queue_is_empty() {
    let rob = RobQueue::new(8);
    assert_eq!(rob.capacity(), 8);
    assert_eq!(rob.len(), 0);
    assert!(rob.is_empty());
    assert!(!rob.is_full());
    assert_eq!(rob.free_slots(), 8);
}

#[test]
fn test_push_pop_is_fifo() {
    let mut rob = RobQueue::new(4);
    assert!(rob.push(nop_at(0x1000)));
    assert!(rob.push(nop_at(0x1004)));
    assert!(rob.push(nop_at(0x1008)));
    assert_eq!(rob.pop().map(|u| u.addr), Some(0x1000));
    assert_eq!(rob.pop().map(|u| u.addr), Some(0x1004));
    assert_eq!(rob.pop().map(|u| u.addr), Some(0x1008));
    assert_eq!(rob.pop(), None);
}

#[test]
fn test_push_rejected_when_full() {
    let mut rob = RobQueue::new(2);
    assert!(rob.push(nop_at(0x1000)));
    assert!(rob.push(nop_at(0x1004)));
    assert!(rob.is_full());
    assert!(!rob.push(nop_at(0x1008)));
    assert_eq!(rob.len(), 2);
    // The rejected micro-op was dropped, not queued out of order.
    assert_eq!(rob.pop().map(|u| u.addr), Some(0x1000));
}

#[test]
fn test_wraparound_preserves_order() {
    let mut rob = RobQueue::new(3);
    assert!(rob.push(nop_at(0)));
    assert!(rob.push(nop_at(4)));
    assert_eq!(rob.pop().map(|u| u.addr), Some(0));
    // Tail wraps past the end of the backing storage.
    assert!(rob.push(nop_at(8)));
    assert!(rob.push(nop_at(12)));
    assert!(rob.is_full());
    assert_eq!(rob.pop().map(|u| u.addr), Some(4));
    assert_eq!(rob.pop().map(|u| u.addr), Some(8));
    assert_eq!(rob.pop().map(|u| u.addr), Some(12));
    assert!(rob.is_empty());
}

#[test]
fn test_clear_resets_queue() {
    let mut rob = RobQueue::new(4);
    assert!(rob.push(nop_at(0x1000)));
    assert!(rob.push(nop_at(0x1004)));
    rob.clear();
    assert!(rob.is_empty());
    assert_eq!(rob.free_slots(), 4);
    assert_eq!(rob.pop(), None);
    assert!(rob.push(nop_at(0x2000)));
    assert_eq!(rob.pop().map(|u| u.addr), Some(0x2000));
}
