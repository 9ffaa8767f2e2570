// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.
