// Round-trip integration tests for the block-cipher family encoder/decoder.
