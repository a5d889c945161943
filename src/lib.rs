// Copyright 2019 The Grin Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Two-level Shamir Secret Sharing for Mnemonic Codes (SLIP-0039).
//! Splits a master secret into groups of human-transcribable mnemonic
//! shares and recovers it from any authorised combination of them.

#[macro_use]
extern crate lazy_static;

pub mod error;
mod field;
pub mod shamir;
pub mod util;

pub use crate::error::{Error, ErrorKind};
pub use crate::shamir::{
	combine_mnemonics, combine_mnemonics_with_passwords, combine_word_mnemonics,
	combine_word_mnemonics_with_passwords, decode_mnemonic, encode_mnemonic, generate_mnemonics,
	generate_mnemonics_random, generate_mnemonics_with_rng, GroupDescriptor, GroupShare, Share,
	ShareConfig,
};
pub use crate::util::hex::{from_hex, to_hex};
