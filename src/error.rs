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

//! Error types for the slip39 crate

use failure::{Backtrace, Context, Fail};
use std::env;
use std::fmt::{self, Display};

/// Error definition
#[derive(Debug, Fail)]
pub struct Error {
	inner: Context<ErrorKind>,
}

/// All error states surfaced by share encoding, splitting and recovery
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
	/// Configuration error, with details
	#[fail(display = "Configuration Error: {}", _0)]
	Config(String),

	/// Inconsistency between different arguments
	#[fail(display = "Argument Error: {}", _0)]
	Argument(String),

	/// Master secret or decoded share payload shorter than the minimum strength
	#[fail(display = "Secret too short: must be at least {} bytes", _0)]
	SecretTooShort(u16),

	/// Master secret or share payload length is odd
	#[fail(display = "Invalid secret length: must be an even number of bytes")]
	InvalidSecretLength,

	/// Passphrase contains a byte outside printable ASCII (32..126)
	#[fail(display = "Invalid passphrase: must be printable ASCII")]
	InvalidPassphrase,

	/// Group threshold exceeds group count, or the number of groups supplied
	#[fail(display = "Invalid group threshold: {}", _0)]
	InvalidGroupThreshold(String),

	/// A group with threshold 1 but more than one member
	#[fail(
		display = "Invalid singleton member: group {} has threshold 1 and more than one member",
		_0
	)]
	InvalidSingletonMember(u8),

	/// An output buffer was too small to hold the encoded shares
	#[fail(display = "Insufficient space in output buffer")]
	InsufficientSpace,

	/// RS1024 checksum verification failed
	#[fail(display = "Invalid mnemonic checksum")]
	InvalidMnemonicChecksum,

	/// Mnemonic shorter than the minimum word count
	#[fail(
		display = "Not enough mnemonic words: each mnemonic must be at least {} words",
		_0
	)]
	NotEnoughMnemonicWords(u8),

	/// A decoded share carries a group threshold greater than its group count
	#[fail(display = "Invalid mnemonic: group threshold cannot be greater than group count")]
	InvalidMnemonicGroupThreshold,

	/// Combination was attempted with no mnemonics at all
	#[fail(display = "List of mnemonics is empty")]
	EmptyMnemonicSet,

	/// Cross-share metadata mismatch or inconsistent encoded length
	#[fail(display = "Invalid share set: {}", _0)]
	InvalidShareSet(String),

	/// Two shares of one group disagree on the member threshold
	#[fail(display = "Invalid member threshold: shares of group {} disagree", _0)]
	InvalidMemberThreshold(u8),

	/// Two shares of one group carry the same member index
	#[fail(display = "Duplicate member index {} in group {}", _1, _0)]
	DuplicateMemberIndex(u8, u8),

	/// Fewer distinct groups contributed than the group threshold
	#[fail(
		display = "Insufficient number of mnemonic groups ({}): the required number of groups is {}",
		_0, _1
	)]
	NotEnoughGroups(u8, u8),

	/// A contributing group holds fewer shares than its member threshold
	#[fail(
		display = "Insufficient number of member shares (group {}): at least {} mnemonics are required",
		_0, _1
	)]
	NotEnoughMemberShares(u8, u8),

	/// Problems with a mnemonic word or the word list
	#[fail(display = "Mnemonic Error: {}", _0)]
	Mnemonic(String),

	/// Assembling the full shared secret resulted in an incorrect digest
	#[fail(display = "Digest Error: {}", _0)]
	Digest(String),

	/// Invalid usage of BitPacker (num_bits longer than the size of the type)
	#[fail(display = "BitVec Error: {}", _0)]
	BitVec(String),

	/// Invalid share padding (padding bits contained set bits)
	#[fail(display = "Padding Error: All padding bits must be 0")]
	Padding,
}

impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let show_bt = match env::var("RUST_BACKTRACE") {
			Ok(r) => r == "1",
			Err(_) => false,
		};
		let backtrace = match self.backtrace() {
			Some(b) => format!("{}", b),
			None => String::from("Unknown"),
		};
		let inner_output = format!("{}", self.inner,);
		let backtrace_output = format!("\n Backtrace: {}", backtrace);
		let mut output = inner_output;
		if show_bt {
			output.push_str(&backtrace_output);
		}
		Display::fmt(&output, f)
	}
}

impl Error {
	/// get kind
	pub fn kind(&self) -> ErrorKind {
		self.inner.get_context().clone()
	}
	/// get cause string
	pub fn cause_string(&self) -> String {
		match self.cause() {
			Some(k) => format!("{}", k),
			None => "Unknown".to_string(),
		}
	}
	/// get cause
	pub fn cause(&self) -> Option<&dyn Fail> {
		self.inner.cause()
	}
	/// get backtrace
	pub fn backtrace(&self) -> Option<&Backtrace> {
		self.inner.backtrace()
	}
}

impl From<ErrorKind> for Error {
	fn from(kind: ErrorKind) -> Error {
		Error {
			inner: Context::new(kind),
		}
	}
}

impl From<Context<ErrorKind>> for Error {
	fn from(inner: Context<ErrorKind>) -> Error {
		Error { inner }
	}
}
