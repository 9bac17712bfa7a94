//! Module containing tests for the entropy estimators.
mod rao_q_sanity;
mod renyi_sanity;
