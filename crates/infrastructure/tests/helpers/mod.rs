#![allow(dead_code)]
pub mod stub_server;

pub use stub_server::{closed_port, StubDnsServer, StubReply};

use hickory_proto::op::{Message, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;

pub fn name(text: &str) -> Name {
    Name::from_ascii(text).unwrap()
}

pub fn a_record(owner: &str, ttl: u32, ip: [u8; 4]) -> Record {
    Record::from_rdata(name(owner), ttl, RData::A(A(Ipv4Addr::from(ip))))
}

pub fn ns_record(zone: &str, nameserver: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(nameserver))))
}

/// Empty response to `query`, same ID and question.
pub fn reply_to(query: &Message, rcode: ResponseCode) -> Message {
    let mut response = Message::response(query.id(), OpCode::Query);
    for question in query.queries() {
        response.add_query(question.clone());
    }
    response.set_response_code(rcode);
    response
}

pub fn answer(query: &Message, records: Vec<Record>) -> Message {
    let mut response = reply_to(query, ResponseCode::NoError);
    for record in records {
        response.add_answer(record);
    }
    response
}

pub fn authoritative_answer(query: &Message, records: Vec<Record>) -> Message {
    let mut response = answer(query, records);
    response.set_authoritative(true);
    response
}

/// Delegation of `zone` to `nameserver`, with A glue when `glue` is given.
pub fn referral(query: &Message, zone: &str, nameserver: &str, glue: Option<[u8; 4]>) -> Message {
    let mut response = reply_to(query, ResponseCode::NoError);
    response.add_name_server(ns_record(zone, nameserver));
    if let Some(ip) = glue {
        response.add_additional(a_record(nameserver, 172800, ip));
    }
    response
}

pub fn question_name(query: &Message) -> String {
    query
        .queries()
        .first()
        .map(|q| q.name().to_utf8())
        .unwrap_or_default()
}
