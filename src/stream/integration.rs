// Round-trip integration tests for the stream-cipher family encoder/decoder.
