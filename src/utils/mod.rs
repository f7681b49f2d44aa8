// Copyright (c) 2025-2026 the truncfmt contributors
// SPDX-License-Identifier: Apache-2.0

pub mod error;
pub mod report;
pub mod source;
