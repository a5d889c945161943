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

//! Share definition, splitting/recovery, and the two-level SLIP-0039 scheme

pub mod share;
pub mod slip39_scheme;
pub mod splitter;

pub use self::share::{decode_mnemonic, encode_mnemonic, Share, ShareConfig};
pub use self::slip39_scheme::{
	combine_mnemonics, combine_mnemonics_with_passwords, combine_word_mnemonics,
	combine_word_mnemonics_with_passwords, generate_mnemonics, generate_mnemonics_random,
	generate_mnemonics_with_rng, GroupDescriptor, GroupShare,
};
pub use self::splitter::{Splitter, SplitterConfig};
